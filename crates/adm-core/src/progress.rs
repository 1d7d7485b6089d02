//! ProgressCalculator: porcentaje de avance siempre derivado.
//!
//! Nunca se almacena de forma autoritativa; recomputarlo en cada render
//! evita que derive respecto del conjunto visible.

/// `round(100 * (current + 1) / visible_len)`, en `[0, 100]`. Con un
/// conjunto visible vacío reporta 0.
pub fn progress(current: usize, visible_len: usize) -> u8 {
    if visible_len == 0 {
        return 0;
    }
    let position = current.min(visible_len - 1) + 1;
    let pct = (position as f64 / visible_len as f64) * 100.0;
    pct.round().min(100.0) as u8
}
