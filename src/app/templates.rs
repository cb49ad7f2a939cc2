/// Document loaded into the editor on first launch.
pub const STARTER_DOCUMENT: &str = r#"# PagePress

Switch orientation, pick columns, then Print → Save as PDF.

---

## Math
Inline: $E=mc^2$
Display: $$\int_0^1 x^2\,dx=1/3$$

## Code
```python
import math
print("hello", math.pi)
```

## Lists
- One
- Two
- Three
"#;

/// How a template lands in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    Replace,
    Append,
}

/// Named example documents. Immutable; only ever copied into the editor,
/// either replacing the current text or appended onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Blank,
    LectureNotes,
    CodeSnippets,
    FormulaSheet,
}

impl Template {
    pub fn all() -> &'static [Template] {
        &[
            Template::Blank,
            Template::LectureNotes,
            Template::CodeSnippets,
            Template::FormulaSheet,
        ]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Template::Blank => "Blank",
            Template::LectureNotes => "Lecture Notes",
            Template::CodeSnippets => "Code Snippets",
            Template::FormulaSheet => "Formula Sheet",
        }
    }

    /// Convert a template-selector dropdown index back to a template.
    pub fn from_index(index: i32) -> Option<Template> {
        if index < 0 {
            return None;
        }
        Template::all().get(index as usize).copied()
    }

    pub fn body(self) -> &'static str {
        match self {
            Template::Blank => "",
            Template::LectureNotes => LECTURE_NOTES,
            Template::CodeSnippets => CODE_SNIPPETS,
            Template::FormulaSheet => FORMULA_SHEET,
        }
    }

    /// The document text after loading this template over `current`.
    pub fn apply(self, current: &str, mode: LoadMode) -> String {
        match mode {
            LoadMode::Replace => self.body().to_string(),
            LoadMode::Append => {
                let mut text = String::with_capacity(current.len() + self.body().len());
                text.push_str(current);
                text.push_str(self.body());
                text
            }
        }
    }
}

const LECTURE_NOTES: &str = r#"# Week X — Topic Title

## Key Ideas
- Concept 1
- Concept 2

## Definitions
- **Term**: meaning here

## Example
Let $f(x)=x^2-x$. Then $$f'(x)=2x-1$$

## Quick Derivation
1. Start from ...
2. Apply rule ...

## Takeaways
- Bullet 1
- Bullet 2
"#;

const CODE_SNIPPETS: &str = r#"# Handy Snippets

### Python
```python
from math import sqrt
def mean(xs):
    return sum(xs)/len(xs)
```

### Bash
```bash
python -m venv .venv && source .venv/bin/activate
pip install -r requirements.txt
```

### SQL
```sql
SELECT id, AVG(score) AS avg_score
FROM results
GROUP BY id;
```
"#;

const FORMULA_SHEET: &str = r#"# Formula Sheet

## Algebra
$ (a+b)^2 = a^2 + 2ab + b^2 $\
$ (a-b)^2 = a^2 - 2ab + b^2 $\
$ a^2-b^2=(a-b)(a+b) $

## Calculus
$\dfrac{d}{dx} x^n = nx^{n-1}$\
$\int_0^1 x^2\,dx = 1/3$

## Trig
$\sin^2 x + \cos^2 x = 1$
"#;
