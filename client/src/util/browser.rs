//! Small browser readings the board needs: window size and pointer position.

use leptos::ev::PointerEvent;
use stickyboard::geometry::{Point, Size};

/// Current `innerWidth`/`innerHeight`, when running in a browser.
pub fn window_viewport() -> Option<Size> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(Size::new(width, height))
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Pointer position in viewport (client) coordinates.
pub fn client_point(ev: &PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}
