use crate::dashboard::view::DashboardView;
use crate::models::Severity;

const STYLE: &str = "body{font-family:system-ui,sans-serif;background:#f9fafb;margin:0;padding:24px;color:#111827}\
main{max-width:1200px;margin:0 auto}\
.cards{display:grid;grid-template-columns:repeat(4,1fr);gap:16px;margin-bottom:24px}\
.card,section{background:#fff;border-radius:8px;box-shadow:0 1px 3px rgba(0,0,0,.1);padding:16px}\
section{margin-bottom:24px}\
.card h3{color:#6b7280;font-size:14px;margin:0 0 8px}\
.card p{font-size:24px;font-weight:700;margin:0}\
.savings{color:#16a34a}\
.alert{padding:12px;border-radius:8px;margin-bottom:8px;background:#fff7ed}\
.alert.high{background:#fef2f2}\
.muted{color:#6b7280}";

/// Escape text for use inside HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a standalone HTML page. Element ids match the static dashboard
/// page (`timestamp`, `total-cost`, `anomalies-count`, `high-alerts`,
/// `potential-savings`, `top-recommendations`).
pub fn render_page(view: &DashboardView) -> String {
    let title = escape_html(&view.title);

    let high_alerts: String = view
        .high_alerts
        .iter()
        .map(|line| format!("<li>{}</li>", escape_html(line)))
        .collect();

    let recommendations: String = view
        .recommendations
        .iter()
        .map(|rec| format!("<li>{}</li>", escape_html(&rec.line())))
        .collect();

    let alerts: String = view
        .alerts
        .iter()
        .map(|a| {
            let class = if a.severity == Severity::High { "alert high" } else { "alert" };
            format!(
                "<div class=\"{}\" data-severity=\"{}\"><strong>{}</strong><div class=\"muted\">{}</div></div>",
                class,
                escape_html(a.severity.as_str()),
                escape_html(&a.service),
                escape_html(&a.message),
            )
        })
        .collect();

    let success_rate = view
        .automation
        .as_ref()
        .map(|a| a.success_rate.clone())
        .unwrap_or_default();

    let automation_section = match &view.automation {
        Some(a) => {
            let items: String = a
                .recent_actions
                .iter()
                .map(|act| {
                    format!(
                        "<li><strong>{}</strong> {} <span class=\"savings\">{}</span></li>",
                        escape_html(&act.service),
                        escape_html(&act.action),
                        act.label.map(escape_html).unwrap_or_default(),
                    )
                })
                .collect();
            format!(
                "<section><h2>Recent Actions</h2><p class=\"muted\">Actions executed: <span id=\"actions-executed\">{}</span></p><ul id=\"recent-actions\">{}</ul></section>",
                escape_html(&a.actions_executed),
                items,
            )
        }
        None => String::new(),
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n<main>\n\
<h1>{title}</h1>\n\
<p class=\"muted\">Last updated: <span id=\"timestamp\">{timestamp}</span></p>\n\
<div class=\"cards\">\
<div class=\"card\"><h3>Total Cost</h3><p>{symbol}<span id=\"total-cost\">{total_cost}</span></p></div>\
<div class=\"card\"><h3>Potential Savings</h3><p class=\"savings\">{symbol}<span id=\"potential-savings\">{potential_savings}</span></p></div>\
<div class=\"card\"><h3>Anomalies</h3><p id=\"anomalies-count\">{anomalies}</p></div>\
<div class=\"card\"><h3>Actions Success</h3><p id=\"success-rate\">{success_rate}</p></div>\
</div>\n\
<section><h2>High Severity Alerts</h2><ul id=\"high-alerts\">{high_alerts}</ul></section>\n\
<section><h2>Active Alerts</h2><div id=\"alerts\">{alerts}</div></section>\n\
<section><h2>Optimization Recommendations</h2><ul id=\"top-recommendations\">{recommendations}</ul></section>\n\
{automation}\n\
</main>\n</body>\n</html>\n",
        title = title,
        style = STYLE,
        symbol = escape_html(&view.currency_symbol),
        timestamp = escape_html(&view.timestamp),
        total_cost = escape_html(&view.total_cost),
        potential_savings = escape_html(&view.potential_savings),
        anomalies = escape_html(&view.anomalies),
        success_rate = escape_html(&success_rate),
        high_alerts = high_alerts,
        alerts = alerts,
        recommendations = recommendations,
        automation = automation_section,
    )
}
