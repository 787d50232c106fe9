use leptos::{html::Input, *};

use crate::app::classes;
use crate::app::session::use_api;

pub const MAX_IMAGE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// Rejects non-images and files over [`MAX_IMAGE_BYTES`] before uploading.
pub fn check_image(content_type: &str, size: f64) -> Result<(), &'static str> {
    if !content_type.starts_with("image/") {
        return Err("Please upload an image file");
    }
    if size > MAX_IMAGE_BYTES {
        return Err("Image size should be less than 5MB");
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
async fn read_file(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("could not read {}: {e:?}", file.name()))?;

    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Single image picker that uploads on selection and reports the stored URL.
#[component]
pub fn ImageUpload(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let api = use_api();
    let input: NodeRef<Input> = create_node_ref();
    let (loading, set_loading) = create_signal(false);
    let disabled = Signal::derive(move || disabled.get());
    let busy = move || disabled.get() || loading.get();

    let on_file = move |_: ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = input.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            if let Err(msg) = check_image(&file.type_(), file.size()) {
                api.toasts.error(msg);
                input.set_value("");
                return;
            }

            set_loading.set(true);
            spawn_local(async move {
                match read_file(&file).await {
                    Ok(data) => {
                        match crate::app::backend::upload_image(api.token(), file.name(), file.type_(), data)
                            .await
                        {
                            Ok(url) => {
                                on_change.call(url);
                                api.toasts.success("Image uploaded successfully");
                            }
                            Err(err) => api.report(err),
                        }
                    }
                    Err(msg) => {
                        logging::error!("{msg}");
                        api.toasts.error("Could not read the selected file");
                    }
                }

                set_loading.set(false);
                input.set_value("");
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, input, set_loading, on_change);
        }
    };

    let pick = move |_: ev::MouseEvent| {
        if !busy() {
            if let Some(input) = input.get() {
                input.click();
            }
        }
    };

    view! {
        <div class="image-upload">
            <input
                type="file"
                class="image-upload__input"
                accept="image/*"
                node_ref=input
                disabled=busy
                on:change=on_file
            />
            <Show
                when=move || !value.with(String::is_empty)
                fallback=move || view! {
                    <div
                        class=move || classes(["image-upload__drop", if busy() { "image-upload__drop--busy" } else { "" }])
                        on:click=pick
                    >
                        {move || if loading.get() { "Uploading..." } else { "Click to upload an image (max 5MB)" }}
                    </div>
                }
            >
                <div class="image-upload__preview">
                    <img src=move || value.get() alt="Project cover"/>
                    <button
                        type="button"
                        class="image-upload__remove"
                        title="Remove image"
                        disabled=move || disabled.get()
                        on:click=move |_| on_change.call(String::new())
                    >
                        "✕"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
#[path = "image_upload_test.rs"]
mod image_upload_test;
