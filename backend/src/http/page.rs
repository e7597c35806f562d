//! HTML presentation shell.
//!
//! The page carries the title, the site selector, the map iframe, the summary
//! line and two chart containers. Its initial state is embedded as JSON; on
//! each selector change the script calls the session's selection endpoint and
//! redraws the summary and both charts. The map iframe is never reloaded.

use crate::api::ViewUpdate;
use crate::error::{DashboardError, DashboardResult};
use crate::services::{Dashboard, DashboardSession};

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

fn selector_options(dashboard: &Dashboard, selected: &str) -> String {
    dashboard
        .catalog()
        .names()
        .map(|name| {
            let value = html_escape::encode_double_quoted_attribute(name);
            let label = html_escape::encode_text(name);
            if name == selected {
                format!("<option value=\"{}\" selected>{}</option>", value, label)
            } else {
                format!("<option value=\"{}\">{}</option>", value, label)
            }
        })
        .collect::<Vec<_>>()
        .join("\n      ")
}

/// Render the dashboard page for a freshly opened session.
pub fn render_page(
    dashboard: &Dashboard,
    session_id: &str,
    session: &DashboardSession,
) -> DashboardResult<String> {
    let update = ViewUpdate::from(session.view());
    let initial = serde_json::json!({
        "session_id": session_id,
        "update": update,
    });
    let initial_json = serde_json::to_string(&initial)
        .map_err(|e| DashboardError::Configuration(format!("Failed to encode page state: {}", e)))?
        .replace("</", "<\\/");

    Ok(PAGE_TEMPLATE
        .replace("{{TITLE}}", &html_escape::encode_text(dashboard.title()))
        .replace("{{PLOTLY_JS}}", PLOTLY_JS)
        .replace("{{OPTIONS}}", &selector_options(dashboard, session.selected()))
        .replace("{{SUMMARY}}", &html_escape::encode_text(&update.summary_text))
        .replace("{{INITIAL_JSON}}", &initial_json))
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{TITLE}}</title>
<script src="{{PLOTLY_JS}}"></script>
</head>
<body>
<h1 style="text-align: center">{{TITLE}}</h1>
<div style="margin: 20px">
  <label for="site-dropdown">Select Launch Site:</label>
  <select id="site-dropdown" style="width: 50%; margin: auto; display: block">
      {{OPTIONS}}
  </select>
</div>
<iframe id="map" src="/v1/map/document" style="width: 100%; height: 600px; border: 0"></iframe>
<div id="info-display" style="text-align: center; margin-top: 20px">{{SUMMARY}}</div>
<div id="selection-error" style="text-align: center; color: #b00020"></div>
<div id="launches-graph"></div>
<div id="success-rate-graph"></div>
<script>
const state = {{INITIAL_JSON}};
const dropdown = document.getElementById('site-dropdown');
const info = document.getElementById('info-display');
const errorBox = document.getElementById('selection-error');
let current = state.update.selected;

function apply(update) {
  info.textContent = update.summary_text;
  Plotly.react('launches-graph', update.launches_figure.data, update.launches_figure.layout);
  Plotly.react('success-rate-graph', update.success_rate_figure.data, update.success_rate_figure.layout);
  current = update.selected;
}

dropdown.addEventListener('change', async () => {
  const site = dropdown.value;
  try {
    const response = await fetch(`/v1/sessions/${state.session_id}/selection`, {
      method: 'PUT',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ site }),
    });
    const body = await response.json();
    if (response.ok) {
      errorBox.textContent = '';
      apply(body.update);
    } else {
      errorBox.textContent = body.message;
      dropdown.value = current;
    }
  } catch (err) {
    errorBox.textContent = `Could not update selection: ${err}`;
    dropdown.value = current;
  }
});

apply(state.update);
</script>
</body>
</html>
"#;
