/// Stylesheet injected once per page for the inspection overlay.
///
/// Everything is namespaced under `twl-` and pinned to the top of the
/// stacking order so page styles cannot bury the overlay.
pub fn overlay_css() -> String {
    format!(
        r#"/* ── Overlay ─────────────────────────────────────── */
.twl-overlay {{
  position: fixed; inset: 0; z-index: {z_overlay}; display: none;
  cursor: crosshair; background: transparent;
}}
.twl-overlay.twl-active {{ display: block; pointer-events: none; }}

/* ── Highlight ───────────────────────────────────── */
.twl-highlight {{
  position: absolute; display: none; z-index: {z_highlight}; pointer-events: none;
  background: rgba(56,189,248,0.12); outline: 2px solid #38BDF8;
  outline-offset: -1px; border-radius: 2px; transition: all 0.05s ease-out;
}}

/* ── Tooltip ─────────────────────────────────────── */
.twl-tooltip {{
  position: fixed; display: none; z-index: {z_tooltip}; pointer-events: none;
  max-width: 420px; padding: 10px 12px; border-radius: 6px;
  background: #0F172A; color: #E2E8F0; border: 1px solid #1E293B;
  box-shadow: 0 10px 25px rgba(0,0,0,0.35);
  font: 12px/1.5 ui-monospace, SFMono-Regular, Menlo, monospace;
}}
.twl-tooltip-tag {{ color: #F472B6; font-weight: 600; margin-bottom: 6px; }}
.twl-tooltip-header {{
  color: #64748B; font-size: 10px; text-transform: uppercase;
  letter-spacing: 0.5px; margin: 6px 0 4px;
}}
.twl-tooltip-classes {{ display: flex; flex-wrap: wrap; gap: 4px; }}
.twl-class-chip {{
  background: #1E293B; color: #38BDF8; padding: 1px 6px; border-radius: 3px;
}}
.twl-class-chip-other {{ color: #94A3B8; }}
.twl-no-tailwind {{ color: #94A3B8; font-style: italic; }}
.twl-css-output {{
  margin-top: 8px; padding-top: 6px; border-top: 1px solid #1E293B;
}}
.twl-css-line {{ white-space: pre-wrap; }}
.twl-css-prop {{ color: #7DD3FC; }}
.twl-css-value {{ color: #FCD34D; }}

/* ── Badge ───────────────────────────────────────── */
.twl-badge {{
  position: fixed; right: 16px; bottom: 16px; z-index: {z_badge}; display: none;
  padding: 6px 12px; border-radius: 9999px; cursor: pointer;
  background: #0EA5E9; color: #FFF; font: 600 12px system-ui, sans-serif;
  box-shadow: 0 4px 12px rgba(0,0,0,0.25);
}}
.twl-badge.twl-active {{ display: block; }}
"#,
        z_overlay = Z_BASE,
        z_highlight = Z_BASE + 1,
        z_tooltip = Z_BASE + 2,
        z_badge = Z_BASE + 3,
    )
}

const Z_BASE: u32 = 2_147_483_640;
