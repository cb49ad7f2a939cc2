use fltk::dialog::{FileDialogType, NativeFileChooser};

/// Native save dialog preset to an .html file name. Returns the chosen
/// path, or None if the user cancelled.
pub fn native_save_html_dialog() -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_filter("*.html");
    nfc.set_preset_file("document.html");
    nfc.show();
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}
