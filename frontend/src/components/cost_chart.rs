use plotters::element::Pie;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::chart::{cost_slices, is_drawable, PieSlice};
use shared::format::format_dollars;
use shared::MonthlyCosts;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use super::chart_slot::{ChartInstance, ChartSlot};
use crate::services::Logger;

const LOG: Logger = Logger::new("cost-chart");

const CANVAS_WIDTH: u32 = 420;
const CANVAS_HEIGHT: u32 = 320;

/// A pie drawn on a canvas; disposing wipes the canvas
pub struct CanvasPie {
    canvas: HtmlCanvasElement,
}

impl ChartInstance for CanvasPie {
    fn dispose(&mut self) {
        let context = self
            .canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok());

        if let Some(context) = context {
            context.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
        }
    }
}

impl CanvasPie {
    fn draw(canvas: HtmlCanvasElement, slices: &[PieSlice]) -> Result<Self, String> {
        let backend = CanvasBackend::with_canvas_object(canvas.clone())
            .ok_or_else(|| "Canvas has no 2d context".to_string())?;
        let root = backend.into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let (width, height) = root.dim_in_pixel();
        let center = (width as i32 / 2, height as i32 / 2);
        let radius = f64::from(width.min(height)) * 0.35;

        let sizes: Vec<f64> = slices.iter().map(|slice| slice.value).collect();
        let colors: Vec<RGBColor> = slices
            .iter()
            .map(|slice| RGBColor(slice.color.0, slice.color.1, slice.color.2))
            .collect();
        let labels: Vec<&str> = slices.iter().map(|slice| slice.label).collect();

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style(("sans-serif", 14).into_font().color(&BLACK));
        pie.percentages(("sans-serif", 12).into_font().color(&WHITE));

        root.draw(&pie).map_err(|e| e.to_string())?;
        root.present().map_err(|e| e.to_string())?;

        Ok(Self { canvas })
    }
}

#[derive(Properties, PartialEq)]
pub struct CostChartProps {
    pub costs: MonthlyCosts,
}

/// Monthly cost pie with a legend
pub struct CostChart {
    canvas_ref: NodeRef,
    slot: ChartSlot<CanvasPie>,
}

impl Component for CostChart {
    type Message = ();
    type Properties = CostChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            slot: ChartSlot::new(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let slices = cost_slices(&ctx.props().costs);

        html! {
            <div class="chart-container">
                <h3>{"Monthly Costs Distribution"}</h3>
                <canvas
                    id="costsChart"
                    ref={self.canvas_ref.clone()}
                    width={CANVAS_WIDTH.to_string()}
                    height={CANVAS_HEIGHT.to_string()}
                ></canvas>
                <ul class="chart-legend">
                    {for slices.iter().map(|slice| html! {
                        <li>
                            <span class="legend-swatch" style={format!("background-color: {};", slice.css_color())}></span>
                            {format!("{}: {}", slice.label, format_dollars(slice.value))}
                        </li>
                    })}
                </ul>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.redraw(&ctx.props().costs);
    }
}

impl CostChart {
    fn redraw(&mut self, costs: &MonthlyCosts) {
        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        let slices = cost_slices(costs);
        self.slot.replace(|| {
            if !is_drawable(&slices) {
                return None;
            }
            match CanvasPie::draw(canvas, &slices) {
                Ok(pie) => Some(pie),
                Err(e) => {
                    LOG.warn(&format!("Failed to draw chart: {}", e));
                    None
                }
            }
        });
    }
}
