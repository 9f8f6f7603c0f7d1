use crate::core::report::{CsvLayer, DateRangeLayer, PdfLayer, SalesSource, SortLayer, UserSource};
use crate::core::{LayerSpec, Report, SourceKind};

/// A report chain described as data: a leaf source plus the layers applied
/// over it, innermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportChain {
    source: SourceKind,
    layers: Vec<LayerSpec>,
}

impl ReportChain {
    pub fn new(source: SourceKind) -> Self {
        Self {
            source,
            layers: Vec::new(),
        }
    }

    pub fn with_layers(source: SourceKind, layers: impl IntoIterator<Item = LayerSpec>) -> Self {
        Self {
            source,
            layers: layers.into_iter().collect(),
        }
    }

    /// Wraps the current chain in one more layer.
    pub fn push(&mut self, layer: LayerSpec) -> &mut Self {
        self.layers.push(layer);
        self
    }

    pub fn source(&self) -> SourceKind {
        self.source
    }

    pub fn layers(&self) -> &[LayerSpec] {
        &self.layers
    }

    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Builds the composed report, outermost layer last in `layers`.
    pub fn build(&self) -> Box<dyn Report> {
        compose(self.source, &self.layers)
    }

    pub fn generate(&self) -> String {
        self.build().generate()
    }

    /// Output after every composition step: the bare source first, then one
    /// entry per layer applied.
    pub fn steps(&self) -> Vec<String> {
        (0..=self.layers.len())
            .map(|applied| compose(self.source, &self.layers[..applied]).generate())
            .collect()
    }
}

fn compose(source: SourceKind, layers: &[LayerSpec]) -> Box<dyn Report> {
    let leaf: Box<dyn Report> = match source {
        SourceKind::Sales => Box::new(SalesSource),
        SourceKind::User => Box::new(UserSource),
    };

    layers.iter().fold(leaf, |inner, layer| -> Box<dyn Report> {
        tracing::debug!("Applying layer {:?}", layer);
        match layer {
            LayerSpec::DateRange { start, end } => {
                Box::new(DateRangeLayer::new(inner, *start, *end))
            }
            LayerSpec::Sort { key } => Box::new(SortLayer::new(inner, key.clone())),
            LayerSpec::Csv => Box::new(CsvLayer::new(inner)),
            LayerSpec::Pdf => Box::new(PdfLayer::new(inner)),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::{SALES_REPORT, USER_REPORT};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_chain_is_the_source() {
        let chain = ReportChain::new(SourceKind::User);
        assert_eq!(chain.depth(), 0);
        assert_eq!(chain.generate(), USER_REPORT);
        assert_eq!(chain.steps(), vec![USER_REPORT.to_string()]);
    }

    #[test]
    fn test_steps_grow_one_layer_at_a_time() {
        let mut chain = ReportChain::new(SourceKind::Sales);
        chain
            .push(LayerSpec::DateRange {
                start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            })
            .push(LayerSpec::Sort {
                key: "Date".to_string(),
            });

        let steps = chain.steps();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0], SALES_REPORT);
        assert_eq!(
            steps[1],
            format!("{}\nFiltered by date: 01.01.2023 to 31.12.2023", SALES_REPORT)
        );
        assert_eq!(steps[2], format!("{}\nSorted by: Date", steps[1]));
        assert_eq!(steps.last().unwrap(), &chain.generate());
    }

    #[test]
    fn test_layer_order_is_preserved() {
        let csv_then_pdf =
            ReportChain::with_layers(SourceKind::Sales, [LayerSpec::Csv, LayerSpec::Pdf]);
        let pdf_then_csv =
            ReportChain::with_layers(SourceKind::Sales, [LayerSpec::Pdf, LayerSpec::Csv]);

        assert!(csv_then_pdf
            .generate()
            .starts_with("Report exported to PDF format:\nReport exported to CSV format:\n"));
        assert!(pdf_then_csv
            .generate()
            .starts_with("Report exported to CSV format:\nReport exported to PDF format:,"));
    }
}
