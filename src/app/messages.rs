use super::config::Orientation;
use super::presets::Preset;
use super::templates::{LoadMode, Template};

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main
/// handles them.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    // Layout controls
    SetOrientation(Orientation),
    SetColumns(u32),
    SetMargin(u32),
    SetGap(u32),
    SetFontSize(u32),
    SetShowGuides(bool),
    SetShowPrintButton(bool),
    ApplyPreset(Preset),

    // Templates & editing
    LoadTemplate(Template, LoadMode),
    DocumentEdited,

    // Delivery
    OpenPreview,
    ExportHtml,
    CopyDataLink,

    // App
    ShowAbout,
    Quit,
}
