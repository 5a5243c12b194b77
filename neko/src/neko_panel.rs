//! Panel timing descriptor.
//!
//! Datasheets give the timings in pixel clocks (horizontal) and lines
//! (vertical). To convert from the usual HT/HPS/HPW and VT/VPS/VPW names:
//!
//! * `hsync_front_porch = (HT - HPS) - width`
//! * `hsync_pulse = HPW`
//! * `hsync_back_porch = HPS - HPW`
//! * `vsync_front_porch = (VT - VPS) - height`
//! * `vsync_pulse = VPW`
//! * `vsync_back_porch = VPS - LPS`
//!
//! The values must come from the datasheet of the glass, not the controller.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LcdParameters {
    pub width: u16,
    pub height: u16,
    pub hsync_back_porch: u16,
    pub hsync_front_porch: u16,
    pub hsync_pulse: u16,
    /// Total horizontal period (display + non-display)
    pub hsync_period: u16,
    pub vsync_back_porch: u16,
    pub vsync_front_porch: u16,
    pub vsync_pulse: u16,
    /// Total vertical period (display + non-display)
    pub vsync_period: u16,
    /// LSHIFT frequency register value, see [`calc_fpr`]
    pub fpr: u32,
}

/// Pixel clock register value for the given geometry and frame rate,
/// `fps * htotal * vtotal * 2^20 / 10^8`.
pub const fn calc_fpr(
    width: u16,
    height: u16,
    hsync_back_porch: u16,
    hsync_front_porch: u16,
    hsync_pulse: u16,
    vsync_back_porch: u16,
    vsync_front_porch: u16,
    vsync_pulse: u16,
    fps: u64,
) -> u32 {
    let horizontal =
        width as u64 + hsync_back_porch as u64 + hsync_front_porch as u64 + hsync_pulse as u64;
    let vertical =
        height as u64 + vsync_back_porch as u64 + vsync_front_porch as u64 + vsync_pulse as u64;

    ((fps * horizontal * vertical * 1_048_576) / 100_000_000) as u32
}
