use fltk::{
    app::Sender,
    button::{Button, CheckButton},
    enums::Align,
    frame::Frame,
    group::Flex,
    menu::Choice,
    prelude::*,
    valuator::HorValueSlider,
};

use crate::app::config::{
    COLUMNS_RANGE, FONT_RANGE_PX, GAP_RANGE_MM, MARGIN_RANGE_MM, Orientation, PageConfig,
};
use crate::app::messages::Message;
use crate::app::presets::Preset;
use crate::app::templates::{LoadMode, Template};

pub const CONTROL_PANEL_WIDTH: i32 = 260;

const ROW_HEIGHT: i32 = 25;
const LABEL_HEIGHT: i32 = 18;

/// The layout controls on the left of the main window. Every widget is
/// bounded to its field's valid range; callbacks send messages, they never
/// mutate the config directly.
pub struct ControlPanel {
    pub orientation_choice: Choice,
    pub columns_slider: HorValueSlider,
    pub margin_slider: HorValueSlider,
    pub gap_slider: HorValueSlider,
    pub font_slider: HorValueSlider,
    pub guides_check: CheckButton,
    pub print_check: CheckButton,
    pub template_choice: Choice,
}

impl ControlPanel {
    /// Push config values back into the widgets, after a preset overwrote
    /// several fields at once.
    pub fn sync_from(&mut self, config: &PageConfig) {
        self.orientation_choice.set_value(match config.orientation {
            Orientation::Portrait => 0,
            Orientation::Landscape => 1,
        });
        self.columns_slider.set_value(config.columns as f64);
        self.margin_slider.set_value(config.margin_mm as f64);
        self.gap_slider.set_value(config.gap_mm as f64);
        self.font_slider.set_value(config.font_px as f64);
        self.guides_check.set_value(config.show_guides);
        self.print_check.set_value(config.show_print_button);
    }
}

pub fn build_control_panel(config: &PageConfig, sender: &Sender<Message>) -> (Flex, ControlPanel) {
    let mut panel = Flex::new(0, 0, CONTROL_PANEL_WIDTH, 0, None);
    panel.set_type(fltk::group::FlexType::Column);
    panel.set_margin(8);
    panel.set_spacing(4);

    section_label(&mut panel, "Orientation");
    let mut orientation_choice = Choice::default();
    orientation_choice.add_choice("Portrait|Landscape");
    orientation_choice.set_value(match config.orientation {
        Orientation::Portrait => 0,
        Orientation::Landscape => 1,
    });
    orientation_choice.set_callback({
        let s = *sender;
        move |c| {
            let orientation = if c.value() == 1 {
                Orientation::Landscape
            } else {
                Orientation::Portrait
            };
            s.send(Message::SetOrientation(orientation));
        }
    });
    panel.fixed(&orientation_choice, ROW_HEIGHT);

    let mut columns_slider =
        bounded_slider(&mut panel, "Columns", COLUMNS_RANGE, config.columns);
    columns_slider.set_callback({
        let s = *sender;
        move |sl| s.send(Message::SetColumns(sl.value() as u32))
    });

    let mut margin_slider =
        bounded_slider(&mut panel, "Page margin (mm)", MARGIN_RANGE_MM, config.margin_mm);
    margin_slider.set_callback({
        let s = *sender;
        move |sl| s.send(Message::SetMargin(sl.value() as u32))
    });

    let mut gap_slider = bounded_slider(&mut panel, "Column gap (mm)", GAP_RANGE_MM, config.gap_mm);
    gap_slider.set_callback({
        let s = *sender;
        move |sl| s.send(Message::SetGap(sl.value() as u32))
    });

    let mut font_slider = bounded_slider(&mut panel, "Base font (px)", FONT_RANGE_PX, config.font_px);
    font_slider.set_callback({
        let s = *sender;
        move |sl| s.send(Message::SetFontSize(sl.value() as u32))
    });

    let mut guides_check = CheckButton::default().with_label("Show column guides");
    guides_check.set_value(config.show_guides);
    guides_check.set_callback({
        let s = *sender;
        move |c| s.send(Message::SetShowGuides(c.value()))
    });
    panel.fixed(&guides_check, ROW_HEIGHT);

    let mut print_check = CheckButton::default().with_label("Show Print button");
    print_check.set_value(config.show_print_button);
    print_check.set_callback({
        let s = *sender;
        move |c| s.send(Message::SetShowPrintButton(c.value()))
    });
    panel.fixed(&print_check, ROW_HEIGHT);

    section_label(&mut panel, "Presets");
    let mut preset_row = Flex::default();
    preset_row.set_type(fltk::group::FlexType::Row);
    preset_row.set_spacing(4);
    for preset in Preset::all() {
        let mut button = Button::default().with_label(preset.display_name());
        button.set_callback({
            let s = *sender;
            let p = *preset;
            move |_| s.send(Message::ApplyPreset(p))
        });
    }
    preset_row.end();
    panel.fixed(&preset_row, 28);

    section_label(&mut panel, "Templates");
    let mut template_choice = Choice::default();
    for template in Template::all() {
        template_choice.add_choice(template.display_name());
    }
    // Lecture Notes preselected, matching the starter document's tone
    template_choice.set_value(1);
    panel.fixed(&template_choice, ROW_HEIGHT);

    let mut template_row = Flex::default();
    template_row.set_type(fltk::group::FlexType::Row);
    template_row.set_spacing(4);
    for (label, mode) in [
        ("Load (replace)", LoadMode::Replace),
        ("Load (append)", LoadMode::Append),
    ] {
        let mut button = Button::default().with_label(label);
        button.set_callback({
            let s = *sender;
            let choice = template_choice.clone();
            move |_| {
                if let Some(template) = Template::from_index(choice.value()) {
                    s.send(Message::LoadTemplate(template, mode));
                }
            }
        });
    }
    template_row.end();
    panel.fixed(&template_row, 28);

    // Remaining vertical space
    Frame::default();

    panel.end();

    let controls = ControlPanel {
        orientation_choice,
        columns_slider,
        margin_slider,
        gap_slider,
        font_slider,
        guides_check,
        print_check,
        template_choice,
    };

    (panel, controls)
}

fn section_label(panel: &mut Flex, text: &str) {
    let mut label = Frame::default().with_label(text);
    label.set_align(Align::Left | Align::Inside);
    label.set_label_size(12);
    panel.fixed(&label, LABEL_HEIGHT);
}

fn bounded_slider(
    panel: &mut Flex,
    label: &str,
    (lo, hi): (u32, u32),
    value: u32,
) -> HorValueSlider {
    section_label(panel, label);
    let mut slider = HorValueSlider::default();
    slider.set_bounds(lo as f64, hi as f64);
    slider.set_step(1.0, 1);
    slider.set_precision(0);
    slider.set_value(value as f64);
    panel.fixed(&slider, ROW_HEIGHT);
    slider
}
