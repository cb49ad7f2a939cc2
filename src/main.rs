use fltk::{app, enums::Event, prelude::*};

use page_press::app::config::PageConfig;
use page_press::app::messages::Message;
use page_press::app::state::AppState;
use page_press::ui::main_window::build_main_window;
use page_press::ui::menu::build_menu;

fn main() {
    let fltk_app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let config = PageConfig::load();
    let mut widgets = build_main_window(&config, &sender);
    build_menu(&mut widgets.menu, &sender);

    // Any edit to the document re-runs the assembler via the dispatch loop.
    widgets.buffer.add_modify_callback({
        let s = sender;
        move |_, inserted, deleted, _, _| {
            if inserted > 0 || deleted > 0 {
                s.send(Message::DocumentEdited);
            }
        }
    });

    // Window close behaves like File/Quit; ignore Escape.
    widgets.wind.set_callback({
        let s = sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::Quit);
            }
        }
    });

    widgets.wind.show();

    let mut state = AppState::new(config, widgets);
    state.refresh_preview();

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::SetOrientation(orientation) => state.set_orientation(orientation),
                Message::SetColumns(columns) => state.set_columns(columns),
                Message::SetMargin(margin_mm) => state.set_margin_mm(margin_mm),
                Message::SetGap(gap_mm) => state.set_gap_mm(gap_mm),
                Message::SetFontSize(font_px) => state.set_font_px(font_px),
                Message::SetShowGuides(show) => state.set_show_guides(show),
                Message::SetShowPrintButton(show) => state.set_show_print_button(show),
                Message::ApplyPreset(preset) => state.apply_preset(preset),
                Message::LoadTemplate(template, mode) => state.load_template(template, mode),
                Message::DocumentEdited => state.document_edited(),
                Message::OpenPreview => state.open_preview(),
                Message::ExportHtml => state.export_html(),
                Message::CopyDataLink => state.copy_data_link(),
                Message::ShowAbout => state.show_about(),
                Message::Quit => {
                    state.shutdown();
                    fltk_app.quit();
                }
            }
        }
    }
}
