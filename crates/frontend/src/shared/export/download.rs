/// Скачивание сгенерированных файлов через браузер
use super::ExportError;
use std::fmt::Debug;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Receives finished export files
pub trait FileSaver {
    fn save(&self, file_name: &str, mime_type: &str, bytes: &[u8]) -> Result<(), ExportError>;
}

/// Blob + временная ссылка `<a download>`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDownload;

impl FileSaver for BrowserDownload {
    fn save(&self, file_name: &str, mime_type: &str, bytes: &[u8]) -> Result<(), ExportError> {
        let blob = create_blob(bytes, mime_type).map_err(ExportError::Download)?;
        download_blob(&blob, file_name).map_err(ExportError::Download)
    }
}

/// Создает Blob объект с бинарными данными
fn create_blob(bytes: &[u8], mime_type: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime_type);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    // Добавляем в DOM, кликаем и удаляем
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();

    after_click([
        ("remove anchor", body.remove_child(&anchor).map(drop)),
        ("revoke object URL", Url::revoke_object_url(&url)),
    ])
}

/// После клика файл уже у браузера: ошибки уборки только в лог
fn after_click<E: Debug>(
    cleanup: impl IntoIterator<Item = (&'static str, Result<(), E>)>,
) -> Result<(), String> {
    for (step, result) in cleanup {
        if let Err(e) = result {
            log::warn!("Download cleanup: {} failed: {:?}", step, e);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_failure_keeps_download_successful() {
        let result = after_click([
            ("remove anchor", Err("node is not a child")),
            ("revoke object URL", Err("unknown url")),
        ]);
        assert_eq!(result, Ok(()));
        assert_eq!(after_click([("remove anchor", Ok::<(), &str>(()))]), Ok(()));
    }
}
