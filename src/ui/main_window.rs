use fltk::{
    app::Sender,
    enums::{Align, Color},
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use super::controls::{CONTROL_PANEL_WIDTH, ControlPanel, build_control_panel};
use crate::app::config::PageConfig;
use crate::app::messages::Message;
use crate::app::templates::STARTER_DOCUMENT;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub controls: ControlPanel,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub status: Frame,
}

pub fn build_main_window(config: &PageConfig, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 960, 640, "\u{1f4c4} PagePress");
    wind.set_xclass("PagePress");

    let mut flex = Flex::new(0, 0, 960, 640, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let mut body = Flex::new(0, 0, 0, 0, None);
    body.set_type(fltk::group::FlexType::Row);

    let (panel, controls) = build_control_panel(config, sender);
    body.fixed(&panel, CONTROL_PANEL_WIDTH);

    let mut buffer = TextBuffer::default();
    buffer.set_text(STARTER_DOCUMENT);
    let mut editor = TextEditor::new(0, 0, 0, 0, "");
    editor.set_buffer(buffer.clone());
    editor.wrap_mode(WrapMode::AtBounds, 0);

    body.end();

    let mut status = Frame::default();
    status.set_align(Align::Left | Align::Inside);
    status.set_label_size(12);
    status.set_label_color(Color::from_rgb(100, 100, 100));
    flex.fixed(&status, 24);

    flex.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        flex,
        menu,
        controls,
        editor,
        buffer,
        status,
    }
}
