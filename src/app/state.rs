use std::path::Path;

use fltk::{app, dialog, frame::Frame, prelude::*, text::TextBuffer, window::Window};

use super::assembler;
use super::config::{Orientation, PageConfig};
use super::export;
use super::presets::Preset;
use super::templates::{LoadMode, Template};
use crate::ui::controls::ControlPanel;
use crate::ui::dialogs::show_about_dialog;
use crate::ui::file_dialogs::native_save_html_dialog;
use crate::ui::main_window::MainWidgets;

/// Main application coordinator: owns the page layout, the editor buffer
/// and the widgets the handlers touch. Every mutation re-runs the assembler
/// and rewrites the preview file, so the browser always reloads the current
/// state.
pub struct AppState {
    pub config: PageConfig,
    pub buffer: TextBuffer,
    pub window: Window,
    pub status: Frame,
    pub controls: ControlPanel,
}

impl AppState {
    pub fn new(config: PageConfig, widgets: MainWidgets) -> Self {
        Self {
            config,
            buffer: widgets.buffer,
            window: widgets.wind,
            status: widgets.status,
            controls: widgets.controls,
        }
    }

    /// Assemble the document from the current layout and editor text.
    pub fn assemble_document(&self) -> String {
        assembler::assemble(&self.config, &self.buffer.text())
    }

    /// Re-run the assembler and rewrite the preview file.
    pub fn refresh_preview(&mut self) {
        let html = self.assemble_document();
        if let Err(e) = export::write_preview_file(&html) {
            eprintln!("Failed to write preview file: {}", e);
        }
        self.update_status();
    }

    fn update_status(&mut self) {
        let (w, h) = self.config.orientation.page_size_mm();
        self.status.set_label(&format!(
            "A4 {} \u{2022} {}\u{00d7}{} mm \u{2022} {} column(s) \u{2022} {} mm margin",
            self.config.orientation.as_css(),
            w,
            h,
            self.config.columns,
            self.config.margin_mm
        ));
    }

    // --- Layout mutations ---

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.config.orientation = orientation;
        self.refresh_preview();
    }

    pub fn set_columns(&mut self, columns: u32) {
        self.config.set_columns(columns);
        self.refresh_preview();
    }

    pub fn set_margin_mm(&mut self, margin_mm: u32) {
        self.config.set_margin_mm(margin_mm);
        self.refresh_preview();
    }

    pub fn set_gap_mm(&mut self, gap_mm: u32) {
        self.config.set_gap_mm(gap_mm);
        self.refresh_preview();
    }

    pub fn set_font_px(&mut self, font_px: u32) {
        self.config.set_font_px(font_px);
        self.refresh_preview();
    }

    pub fn set_show_guides(&mut self, show: bool) {
        self.config.show_guides = show;
        self.refresh_preview();
    }

    pub fn set_show_print_button(&mut self, show: bool) {
        self.config.show_print_button = show;
        self.refresh_preview();
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        self.config.apply_preset(preset);
        self.controls.sync_from(&self.config);
        self.refresh_preview();
    }

    // --- Templates ---

    pub fn load_template(&mut self, template: Template, mode: LoadMode) {
        let text = template.apply(&self.buffer.text(), mode);
        self.buffer.set_text(&text);
        self.refresh_preview();
    }

    pub fn document_edited(&mut self) {
        self.refresh_preview();
    }

    // --- Delivery ---

    pub fn open_preview(&mut self) {
        self.refresh_preview();
        if let Err(e) = export::open_in_browser(&export::preview_file_path()) {
            dialog::alert_default(&format!("Error opening preview: {}", e));
        }
    }

    pub fn export_html(&mut self) {
        if let Some(path) = native_save_html_dialog() {
            let html = self.assemble_document();
            match export::export_html(Path::new(&path), &html) {
                Ok(_) => self
                    .window
                    .set_label(&format!("\u{1f4c4} PagePress - {}", path)),
                Err(e) => dialog::alert_default(&format!("Error exporting HTML: {}", e)),
            }
        }
    }

    /// Put a base64 data link for the current document on the clipboard.
    pub fn copy_data_link(&mut self) {
        let uri = export::data_uri(&self.assemble_document());
        app::copy(&uri);
    }

    pub fn show_about(&self) {
        show_about_dialog();
    }

    /// Persist the layout and drop the preview temp file. Called once, on
    /// quit.
    pub fn shutdown(&mut self) {
        if let Err(e) = self.config.save() {
            eprintln!("Failed to save layout config: {}", e);
        }
        export::cleanup_preview_file();
    }
}
