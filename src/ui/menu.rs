use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::messages::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/Export HTML...", Shortcut::Ctrl | 'e', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ExportHtml) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // View
    menu.add("View/Open Preview in Browser", Shortcut::Ctrl | 'm', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenPreview) });
    menu.add("View/Copy Data Link", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::CopyDataLink) });

    // Help
    menu.add("Help/About PagePress", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
