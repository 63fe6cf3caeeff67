use shared::report::{LineStyle, Paragraph, ReportLine, ReportSection, ResultReport, SectionBody};
use yew::prelude::*;

use super::cost_chart::CostChart;
use crate::hooks::DisplayedResult;

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub displayed: DisplayedResult,
    pub on_save: Callback<DisplayedResult>,
}

pub fn line_class(style: LineStyle) -> &'static str {
    match style {
        LineStyle::Plain => "result-line",
        LineStyle::Emphasis => "result-line total",
        LineStyle::Danger => "result-line shortfall",
    }
}

fn line_html(line: &ReportLine) -> Html {
    html! {
        <p class={line_class(line.style)}>
            <strong>{format!("{}: ", line.label)}</strong>
            {line.value.clone()}
        </p>
    }
}

fn paragraph_html(paragraph: &Paragraph) -> Html {
    html! {
        <p>
            {if let Some(lead) = paragraph.lead.as_ref() {
                html! { <strong>{format!("{} ", lead)}</strong> }
            } else { html! {} }}
            {paragraph.text.clone()}
        </p>
    }
}

fn section_html(section: &ReportSection) -> Html {
    let body = match &section.body {
        SectionBody::Lines(lines) => html! { <>{for lines.iter().map(line_html)}</> },
        SectionBody::Paragraphs(paragraphs) => html! { <>{for paragraphs.iter().map(paragraph_html)}</> },
    };

    html! {
        <div class="result-section">
            <h3>{section.title.clone()}</h3>
            {body}
        </div>
    }
}

/// Estimate report, cost chart and the save button
#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    let displayed = &props.displayed;
    let report = ResultReport::build(&displayed.result, displayed.input.as_ref());

    let onclick = {
        let on_save = props.on_save.clone();
        let displayed = displayed.clone();
        Callback::from(move |_: MouseEvent| on_save.emit(displayed.clone()))
    };

    html! {
        <section id="result" class="result-section-container">
            {for report.sections.iter().map(section_html)}
            <CostChart costs={displayed.result.monthly_costs.clone()} />
            <button type="button" class="btn btn-secondary" {onclick}>{"Save Scenario"}</button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_classes() {
        assert_eq!(line_class(LineStyle::Plain), "result-line");
        assert!(line_class(LineStyle::Emphasis).contains("total"));
        assert!(line_class(LineStyle::Danger).contains("shortfall"));
    }
}
