//! Pie chart data for the monthly cost breakdown.

use crate::MonthlyCosts;

/// Category order is fixed so colors stay attached to the same cost
pub const COST_CATEGORIES: [&str; 4] = ["Mortgage", "Property Tax", "Insurance", "HOA"];

/// RGB colors, one per category
pub const COST_PALETTE: [(u8, u8, u8); 4] = [
    (0xFF, 0x63, 0x84),
    (0x36, 0xA2, 0xEB),
    (0xFF, 0xCE, 0x56),
    (0x4B, 0xC0, 0xC0),
];

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub value: f64,
    pub color: (u8, u8, u8),
}

impl PieSlice {
    /// CSS hex form of the slice color, for legends
    pub fn css_color(&self) -> String {
        let (r, g, b) = self.color;
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

/// Slices for the four monthly cost components. Negative values are
/// clamped to zero; the trust fund credit is not a slice.
pub fn cost_slices(costs: &MonthlyCosts) -> [PieSlice; 4] {
    let values = [costs.mortgage, costs.property_tax, costs.insurance, costs.hoa];
    std::array::from_fn(|index| PieSlice {
        label: COST_CATEGORIES[index],
        value: values[index].max(0.0),
        color: COST_PALETTE[index],
    })
}

/// A pie needs something to divide
pub fn is_drawable(slices: &[PieSlice]) -> bool {
    slices.iter().map(|slice| slice.value).sum::<f64>() > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slices_follow_fixed_order_and_palette() {
        let costs = MonthlyCosts {
            mortgage: 9_000.0,
            property_tax: 1_100.0,
            insurance: 350.0,
            hoa: 400.0,
            trust_fund_credit: 3_333.33,
            total: 7_516.67,
        };

        let slices = cost_slices(&costs);
        let labels: Vec<_> = slices.iter().map(|s| s.label).collect();
        assert_eq!(labels, ["Mortgage", "Property Tax", "Insurance", "HOA"]);
        assert_eq!(slices[0].value, 9_000.0);
        assert_eq!(slices[3].value, 400.0);
        assert_eq!(slices[0].css_color(), "#FF6384");
        assert_eq!(slices[1].css_color(), "#36A2EB");
        assert_eq!(slices[2].css_color(), "#FFCE56");
        assert_eq!(slices[3].css_color(), "#4BC0C0");
    }

    #[test]
    fn test_empty_breakdown_is_not_drawable() {
        let slices = cost_slices(&MonthlyCosts::default());
        assert!(!is_drawable(&slices));

        let costs = MonthlyCosts { hoa: 200.0, ..Default::default() };
        assert!(is_drawable(&cost_slices(&costs)));
    }

    #[test]
    fn test_negative_components_clamped() {
        let costs = MonthlyCosts { mortgage: -5.0, hoa: 100.0, ..Default::default() };
        assert_eq!(cost_slices(&costs)[0].value, 0.0);
    }
}
