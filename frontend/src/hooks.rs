use std::future::Future;

use kafka_sonar_shared::{MetadataFetchError, MountGuard};
use web_sys::{console, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Fetch the repository star count once per mount.
///
/// Returns `None` until the request settles successfully, and forever if it
/// fails. Failures are only logged. A result that arrives after the caller
/// unmounted is dropped instead of written into released state.
#[hook]
pub fn use_star_count() -> Option<u64> {
    let star_count = use_state(|| None::<u64>);

    {
        let star_count = star_count.clone();
        use_effect_with((), move |_| {
            let guard = MountGuard::new();
            let task_guard = guard.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let fetch = crate::api::fetch_star_count();
                let outcome =
                    apply_star_count(fetch, task_guard, move |count| star_count.set(Some(count)))
                        .await;
                if let Err(e) = outcome {
                    console::error_1(&format!("Failed to fetch star count: {}", e).into());
                }
            });
            move || guard.release()
        });
    }

    *star_count
}

/// Await `fetch` and hand a successful count to `apply` while `guard` is alive.
///
/// Errors are returned for the caller to log; `apply` only ever sees a
/// settled success.
pub async fn apply_star_count<F>(
    fetch: F,
    guard: MountGuard,
    apply: impl FnOnce(u64),
) -> Result<(), MetadataFetchError>
where
    F: Future<Output = Result<u64, MetadataFetchError>>,
{
    let count = fetch.await?;
    guard.run_if_alive(move || apply(count));
    Ok(())
}

/// Smoothly scroll the window so the element with `anchor` as its id sits at
/// the top of the viewport. Unknown anchors are ignored.
pub fn scroll_to_anchor(anchor: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(target) = window
        .document()
        .and_then(|document| document.get_element_by_id(anchor))
    else {
        return;
    };

    let offset = window.scroll_y().unwrap_or_default();
    let options = ScrollToOptions::new();
    options.set_left(0.0);
    options.set_top(target.get_bounding_client_rect().top() + offset);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
