use contracts::domain::a002_gallery::aggregate::ProbeResult;
use contracts::shared::assets;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

/// Check whether an image can be loaded from `url`.
///
/// Never fails: any load error (missing file, network, decoding) yields
/// `ok = false`. A cache-busting `probe=<ms>` parameter is appended so a
/// previously cached miss does not hide a newly uploaded file.
pub async fn probe_image(url: &str) -> ProbeResult {
    let img = match HtmlImageElement::new() {
        Ok(img) => img,
        Err(_) => return ProbeResult::missing(url),
    };

    let loaded = js_sys::Promise::new(&mut |resolve, _reject| {
        let on_load = {
            let resolve = resolve.clone();
            Closure::once_into_js(move || {
                let _ = resolve.call1(&JsValue::NULL, &JsValue::TRUE);
            })
        };
        let on_error = Closure::once_into_js(move || {
            let _ = resolve.call1(&JsValue::NULL, &JsValue::FALSE);
        });
        img.set_onload(Some(on_load.unchecked_ref()));
        img.set_onerror(Some(on_error.unchecked_ref()));
    });

    img.set_src(&assets::probe_url(url, js_sys::Date::now() as u64));

    let ok = JsFuture::from(loaded)
        .await
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false);

    img.set_onload(None);
    img.set_onerror(None);

    if ok {
        ProbeResult::found(url)
    } else {
        ProbeResult::missing(url)
    }
}
