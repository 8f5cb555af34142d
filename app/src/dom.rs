// Small browser helpers shared by the views.

use web_sys::window;

pub fn scroll_to_top() {
    if let Some(w) = window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn scroll_into_view(id: &str) -> Result<(), String> {
    let win = window().ok_or("no window")?;
    let doc = win.document().ok_or("no document")?;
    let el = doc
        .get_element_by_id(id)
        .ok_or_else(|| format!("missing #{id}"))?;
    el.scroll_into_view();
    Ok(())
}

/// Local date as YYYY-MM-DD.
pub fn today_ymd() -> String {
    let d = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        d.get_full_year() as i32,
        d.get_month() as i32 + 1,
        d.get_date() as i32
    )
}
