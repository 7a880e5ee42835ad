//! Embedded page templates. Names ending in `.html` are auto-escaped.

pub const ENTRY: &str = "report.html";

pub const ALL: &[(&str, &str)] = &[
    (ENTRY, REPORT),
    ("sections.html", SECTIONS),
    ("modals.html", MODALS),
    ("report.css", STYLESHEET),
];

const REPORT: &str = r##"{%- import "sections.html" as ui -%}
{%- import "modals.html" as dialogs -%}
<!DOCTYPE html>
<html lang="{{ lang }}" dir="{{ dir }}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{ header.brand }} | {{ title.lead }} {{ title.accent }}</title>
<style>
{% include "report.css" %}
</style>
</head>
<body class="theme-{{ style.theme }}">
<header class="topbar">
  <div class="brand">
    <span class="brand-mark">{{ header.brand_mark }}</span>
    <div class="brand-text"><strong>{{ header.brand }}</strong><small>{{ header.subtitle }}</small></div>
  </div>
  <a class="toggle" href="{{ header.toggle_href }}" hreflang="{{ header.toggle_lang }}" lang="{{ header.toggle_lang }}">{{ header.toggle_label }}</a>
</header>
<main id="report">
  <div class="title-row">
    <div>
      <h1>{{ title.lead }} <span class="accent">{{ title.accent }}</span></h1>
      <p class="period">{{ title.period }}</p>
    </div>
    <a class="button" href="{{ formulas_trigger.href }}">{{ formulas_trigger.label }}</a>
  </div>
  <div class="grid">
{%- for section in sections %}
{%- if section.kind == "hero" %}
{{ ui.hero(section) }}
{%- elif section.kind == "roi" %}
{{ ui.roi(section) }}
{%- elif section.kind == "spend_efficiency" %}
{{ ui.spend_efficiency(section, style) }}
{%- elif section.kind == "branch_revenue" %}
{{ ui.branch_revenue(section, style) }}
{%- elif section.kind == "allocation" %}
{{ ui.allocation(section, style) }}
{%- elif section.kind == "tenants" %}
{{ ui.tenants(section, style) }}
{%- endif %}
{%- endfor %}
  </div>
{%- if generated %}
  <footer class="generated">{{ generated }}</footer>
{%- endif %}
</main>
{{ dialogs.formulas(formulas, active_modal == "formulas", close_label) }}
{{ dialogs.expenses(expenses, active_modal == "expenses", close_label) }}
</body>
</html>
"##;

const SECTIONS: &str = r##"{% macro card_head(card) -%}
{%- if card.title %}
  <div class="card-head">
    <h2>{{ card.title }}</h2>
{%- if card.subtitle %}
    <p class="subtitle">{{ card.subtitle }}</p>
{%- endif %}
  </div>
{%- endif %}
{%- endmacro %}

{% macro hero(s) -%}
<section class="{{ s.card.class }} span-2 rise" data-section="hero">
  <span class="badge">{{ s.badge }}</span>
  <p class="hero-amount"><bdi>{{ s.amount }}</bdi></p>
  <p class="hero-description">{{ s.description }}</p>
  <div class="stats">
{%- for stat in s.stats %}
    <div class="stat"><span>{{ stat.label }}</span><strong><bdi>{{ stat.value }}</bdi></strong></div>
{%- endfor %}
  </div>
</section>
{%- endmacro %}

{% macro roi(s) -%}
<section class="{{ s.card.class }} rise" data-section="roi">
{{ card_head(s.card) }}
  <div class="gauge">
    <svg viewBox="0 0 256 256" role="img" aria-label="{{ s.percentage }}" style="direction:ltr">
      <circle class="gauge-track" cx="128" cy="128" r="110" fill="none" stroke-width="18"></circle>
      <circle class="gauge-fill" cx="128" cy="128" r="110" fill="none" stroke-width="18" stroke-linecap="round"
        stroke-dasharray="{{ s.gauge.circumference }}" stroke-dashoffset="{{ s.gauge.offset }}"
        transform="rotate(-90 128 128)"></circle>
    </svg>
    <div class="gauge-label"><strong dir="ltr">{{ s.percentage }}</strong><span>{{ s.caption }}</span></div>
  </div>
  <h3>{{ s.headline }}</h3>
  <p class="sentence">
{%- for seg in s.sentence -%}
{%- if seg.emphasis %}<strong><bdi>{{ seg.text }}</bdi></strong>{% else %}{{ seg.text }}{% endif -%}
{%- endfor -%}
  </p>
{%- if s.note %}
  <aside class="note"><strong>{{ s.note.label }}</strong> {{ s.note.text }}</aside>
{%- endif %}
</section>
{%- endmacro %}

{% macro spend_efficiency(s, style) -%}
<section class="{{ s.card.class }} rise" data-section="spend_efficiency">
{{ card_head(s.card) }}
  <svg class="chart" viewBox="0 0 {{ s.frame.width }} {{ s.frame.height }}" role="img" style="direction:ltr">
{%- for bar in s.bars %}
    <g>
      <title>{{ bar.label }}: {{ bar.display }}</title>
      <rect x="{{ bar.rect.x }}" y="{{ bar.rect.y }}" width="{{ bar.rect.width }}" height="{{ bar.rect.height }}" rx="10" fill="{{ bar.color }}"></rect>
      <text x="{{ bar.label_x }}" y="{{ bar.label_y }}" text-anchor="{{ bar.label_anchor }}" dominant-baseline="middle" fill="{{ style.palette.axis_text }}">{{ bar.label }}</text>
    </g>
{%- endfor %}
  </svg>
  <div class="stats footer">
{%- for stat in s.footer %}
    <div class="stat"><span>{{ stat.label }}</span><strong><bdi>{{ stat.value }}</bdi></strong></div>
{%- endfor %}
  </div>
</section>
{%- endmacro %}

{% macro branch_revenue(s, style) -%}
<section class="{{ s.card.class }} rise" data-section="branch_revenue">
{{ card_head(s.card) }}
  <svg class="chart" viewBox="0 0 {{ s.frame.width }} {{ s.frame.height }}" role="img" style="direction:ltr">
{%- for bar in s.bars %}
    <g>
      <title>{{ bar.tooltip }}</title>
      <rect x="{{ bar.rect.x }}" y="{{ bar.rect.y }}" width="{{ bar.rect.width }}" height="{{ bar.rect.height }}" rx="8" fill="{{ bar.color }}"></rect>
      <text x="{{ bar.label_x }}" y="{{ bar.label_y }}" text-anchor="{{ bar.label_anchor }}" fill="{{ style.palette.axis_text }}">{{ bar.label }}</text>
    </g>
{%- endfor %}
  </svg>
</section>
{%- endmacro %}

{% macro allocation(s, style) -%}
<section class="{{ s.card.class }} rise" data-section="allocation">
{{ card_head(s.card) }}
  <div class="donut">
    <svg viewBox="0 0 300 300" role="img" style="direction:ltr">
{%- for slice in s.slices %}
      <path d="{{ slice.path }}" fill="{{ slice.color }}" stroke="{{ style.palette.slice_stroke }}" stroke-width="2"><title>{{ slice.label }}: {{ slice.display }}</title></path>
{%- endfor %}
    </svg>
    <div class="donut-center"><span>{{ s.total_label }}</span><strong><bdi>{{ s.total_display }}</bdi></strong></div>
  </div>
  <ul class="legend">
{%- for item in s.legend %}
    <li><span class="swatch" style="background:{{ item.color }}"></span><span>{{ item.label }}</span><bdi>{{ item.display }}</bdi></li>
{%- endfor %}
  </ul>
{%- if s.note %}
  <aside class="note"><strong>{{ s.note.label }}</strong> {{ s.note.text }}</aside>
{%- endif %}
{%- if s.expenses_trigger %}
  <a class="button subtle" href="{{ s.expenses_trigger.href }}">{{ s.expenses_trigger.label }}</a>
{%- endif %}
</section>
{%- endmacro %}

{% macro tenants(s, style) -%}
<section class="{{ s.card.class }} span-2 rise" data-section="tenants">
{{ card_head(s.card) }}
  <div class="table-wrap">
    <table>
      <thead>
        <tr>
{%- for col in s.columns %}
          <th style="text-align:{% if col.numeric %}{{ style.align_end }}{% else %}{{ style.align_start }}{% endif %}">{{ col.label }}</th>
{%- endfor %}
        </tr>
      </thead>
      <tbody>
{%- for row in s.rows %}
        <tr>
          <td style="text-align:{{ style.align_start }}"><strong>{{ row.name }}</strong><small>{{ row.branch }}</small></td>
          <td style="text-align:{{ style.align_start }}">{{ row.source }}</td>
          <td style="text-align:{{ style.align_end }}"><bdi>{{ row.rent }}</bdi></td>
          <td style="text-align:{{ style.align_end }}"><bdi>{{ row.revenue }}</bdi></td>
          <td style="text-align:{{ style.align_end }}"><span class="pill pill-{{ row.tone }}">{{ row.status }}</span></td>
        </tr>
{%- endfor %}
      </tbody>
    </table>
  </div>
</section>
{%- endmacro %}
"##;

const MODALS: &str = r##"{% macro close_controls(label) -%}
  <a class="modal-backdrop" href="#report" aria-label="{{ label }}"></a>
{%- endmacro %}

{% macro formulas(m, open, close_label) -%}
<div id="formulas" class="modal{% if open %} is-open{% endif %}" role="dialog" aria-modal="true" aria-labelledby="formulas-title">
{{ close_controls(close_label) }}
  <div class="modal-panel">
    <div class="modal-head">
      <h2 id="formulas-title">{{ m.title }}</h2>
      <a class="modal-close" href="#report" aria-label="{{ close_label }}">&times;</a>
    </div>
    <dl class="formulas">
{%- for entry in m.entries %}
      <div class="formula">
        <dt>{{ entry.label }}</dt>
        <dd><code>{{ entry.formula }}</code><p>{{ entry.description }}</p></dd>
      </div>
{%- endfor %}
    </dl>
  </div>
</div>
{%- endmacro %}

{% macro expenses(m, open, close_label) -%}
<div id="expenses" class="modal{% if open %} is-open{% endif %}" role="dialog" aria-modal="true" aria-labelledby="expenses-title">
{{ close_controls(close_label) }}
  <div class="modal-panel">
    <div class="modal-head">
      <div>
        <h2 id="expenses-title">{{ m.title }}</h2>
        <p class="subtitle">{{ m.subtitle }}</p>
      </div>
      <a class="modal-close" href="#report" aria-label="{{ close_label }}">&times;</a>
    </div>
    <ul class="expenses">
{%- for line in m.lines %}
      <li><span>{{ line.label }}</span><bdi>{{ line.display }}</bdi></li>
{%- endfor %}
      <li class="total"><span>{{ m.total_label }}</span><bdi>{{ m.total_display }}</bdi></li>
    </ul>
  </div>
</div>
{%- endmacro %}
"##;

const STYLESHEET: &str = r##"* { box-sizing: border-box; margin: 0; padding: 0; }
body {
  font-family: -apple-system, BlinkMacSystemFont, "SF Pro Display", "Segoe UI", Tahoma, sans-serif;
  background: #F5F5F7;
  color: #1D1D1F;
  line-height: 1.5;
}
a { color: inherit; text-decoration: none; }
.topbar {
  display: flex; align-items: center; justify-content: space-between;
  padding: 16px 32px; background: rgba(255, 255, 255, 0.8);
  border-bottom: 1px solid #E5E5EA; position: sticky; top: 0; z-index: 10;
}
.brand { display: flex; align-items: center; gap: 12px; }
.brand-mark {
  display: inline-flex; align-items: center; justify-content: center;
  width: 36px; height: 36px; border-radius: 10px; background: #1D1D1F; color: #FFFFFF; font-weight: 700;
}
.brand-text { display: flex; flex-direction: column; }
.brand-text small { color: #86868B; font-size: 12px; }
.toggle, .button {
  display: inline-block; padding: 8px 16px; border-radius: 999px;
  background: #1D1D1F; color: #FFFFFF; font-size: 14px; font-weight: 600;
}
.button.subtle { background: #E5E5EA; color: #1D1D1F; margin-top: 16px; }
main { max-width: 1200px; margin: 0 auto; padding: 32px; }
.title-row { display: flex; align-items: flex-end; justify-content: space-between; margin-bottom: 24px; gap: 16px; }
h1 { font-size: 40px; letter-spacing: -0.02em; }
h1 .accent { color: #86868B; }
.period { color: #86868B; }
.grid { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 24px; }
.span-2 { grid-column: span 2; }
.card { background: #FFFFFF; border-radius: 24px; padding: 28px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.06); }
.card-dark { background: #1D1D1F; color: #F5F5F7; }
.card-dark .subtitle, .card-dark .stat span { color: #9CA3AF; }
.card-head { margin-bottom: 16px; }
.card-head h2 { font-size: 20px; }
.subtitle { color: #86868B; font-size: 14px; }
.badge { display: inline-block; padding: 4px 12px; border-radius: 999px; background: rgba(52, 199, 89, 0.15); color: #34C759; font-size: 12px; font-weight: 600; }
.hero-amount { font-size: 56px; font-weight: 700; letter-spacing: -0.03em; margin: 12px 0 4px; }
.hero-description { color: #9CA3AF; max-width: 640px; }
.stats { display: flex; gap: 32px; margin-top: 20px; flex-wrap: wrap; }
.stat { display: flex; flex-direction: column; }
.stat span { color: #86868B; font-size: 13px; }
.stat strong { font-size: 20px; }
.gauge { position: relative; width: 220px; margin: 0 auto 16px; }
.gauge-track { stroke: {{ style.palette.gauge_track }}; }
.gauge-fill { stroke: {{ style.palette.gauge_fill }}; transition: stroke-dashoffset 1.2s ease-out; }
.gauge-label { position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; }
.gauge-label strong { font-size: 40px; }
.gauge-label span { color: #86868B; font-size: 13px; }
.sentence { margin-top: 8px; }
.note { margin-top: 16px; padding: 12px 16px; border-radius: 12px; background: rgba(134, 134, 139, 0.12); font-size: 14px; }
.chart { width: 100%; height: auto; font-size: 14px; }
.donut { position: relative; max-width: 300px; margin: 0 auto; }
.donut-center { position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; }
.donut-center span { color: #86868B; font-size: 13px; }
.legend { list-style: none; margin-top: 16px; display: grid; gap: 8px; }
.legend li { display: flex; align-items: center; gap: 8px; }
.legend li bdi { margin-inline-start: auto; }
.swatch { width: 12px; height: 12px; border-radius: 4px; border: 1px solid rgba(134, 134, 139, 0.4); }
.table-wrap { overflow-x: auto; }
table { width: 100%; border-collapse: collapse; font-size: 14px; }
th { color: #86868B; font-weight: 500; padding: 8px 12px; border-bottom: 1px solid #E5E5EA; }
td { padding: 12px; border-bottom: 1px solid #F5F5F7; }
td small { display: block; color: #86868B; }
.pill { display: inline-block; padding: 2px 10px; border-radius: 999px; font-size: 12px; font-weight: 600; }
.pill-affirmative { background: {{ style.pill_affirmative.background }}; color: {{ style.pill_affirmative.text }}; }
.pill-neutral { background: {{ style.pill_neutral.background }}; color: {{ style.pill_neutral.text }}; }
.generated { margin-top: 32px; color: #86868B; font-size: 13px; text-align: center; }
.modal { display: none; position: fixed; inset: 0; z-index: 50; align-items: center; justify-content: center; }
.modal:target, .modal.is-open { display: flex; }
body:has(:target) .modal.is-open:not(:target) { display: none; }
.modal-backdrop { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.45); }
.modal-panel {
  position: relative; background: #FFFFFF; color: #1D1D1F; border-radius: 24px;
  padding: 28px; width: min(640px, 92vw); max-height: 85vh; overflow-y: auto;
  animation: rise 0.35s cubic-bezier(0.16, 1, 0.3, 1) both;
}
.modal-head { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 16px; }
.modal-close { font-size: 24px; line-height: 1; color: #86868B; }
.formulas { display: grid; gap: 16px; }
.formula dt { font-weight: 600; }
.formula code { display: block; margin: 4px 0; padding: 8px 12px; border-radius: 8px; background: #F5F5F7; font-size: 13px; }
.formula p { color: #6B7280; font-size: 14px; }
.expenses { list-style: none; }
.expenses li { display: flex; justify-content: space-between; padding: 10px 0; border-bottom: 1px solid #F5F5F7; }
.expenses li.total { font-weight: 700; border-bottom: none; }
.rise { animation: rise 0.6s cubic-bezier(0.16, 1, 0.3, 1) both; }
@keyframes rise { from { opacity: 0; transform: translateY(12px); } to { opacity: 1; transform: none; } }
@media (max-width: 800px) {
  .grid { grid-template-columns: minmax(0, 1fr); }
  .span-2 { grid-column: auto; }
  main { padding: 16px; }
  .hero-amount { font-size: 40px; }
}
"##;
