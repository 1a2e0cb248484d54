//! Platform glue: task spawning and browser handles.

use std::future::Future;

/// Run a future to completion in the background. In the browser it is queued on the
/// microtask loop; on the host it is driven inline.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(future);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        futures::executor::block_on(future);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

/// True when running inside a browser with a live document.
pub fn has_document() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        document().is_some()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}
