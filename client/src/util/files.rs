//! Browser file handles picked from an `<input type="file">`.

use crate::state::upload::SelectedFile;

/// A user-selected file. In the browser build it wraps the DOM `File` so
/// the multipart body can stream it without copying into WASM memory.
#[derive(Clone, Debug)]
pub struct BrowserFile {
    name: String,
    mime_type: String,
    #[cfg(feature = "hydrate")]
    handle: web_sys::File,
}

#[cfg(feature = "hydrate")]
impl BrowserFile {
    pub fn from_file(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime_type: file.type_(),
            handle: file,
        }
    }

    pub fn handle(&self) -> &web_sys::File {
        &self.handle
    }

    /// First file of an input element's selection, if any.
    pub fn from_input(input: &web_sys::HtmlInputElement) -> Option<Self> {
        input.files()?.get(0).map(Self::from_file)
    }
}

impl SelectedFile for BrowserFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}
