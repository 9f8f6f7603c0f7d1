use crate::core::Report;
use chrono::NaiveDate;

pub const SALES_REPORT: &str = "Sales report:\n1. Product A - 100 units\n2. Product B - 200 units";
pub const USER_REPORT: &str = "User report:\n1. User A\n2. User B";

pub const CSV_LABEL: &str = "Report exported to CSV format:";
pub const PDF_LABEL: &str = "Report exported to PDF format:";

/// Short date: day, month, year.
pub const SHORT_DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, Copy, Default)]
pub struct SalesSource;

impl Report for SalesSource {
    fn generate(&self) -> String {
        SALES_REPORT.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UserSource;

impl Report for UserSource {
    fn generate(&self) -> String {
        USER_REPORT.to_string()
    }
}

/// Appends the date range the report was filtered by.
#[derive(Debug, Clone)]
pub struct DateRangeLayer<R: Report> {
    inner: R,
    start: NaiveDate,
    end: NaiveDate,
}

impl<R: Report> DateRangeLayer<R> {
    pub fn new(inner: R, start: NaiveDate, end: NaiveDate) -> Self {
        Self { inner, start, end }
    }
}

impl<R: Report> Report for DateRangeLayer<R> {
    fn generate(&self) -> String {
        format!(
            "{}\nFiltered by date: {} to {}",
            self.inner.generate(),
            self.start.format(SHORT_DATE_FORMAT),
            self.end.format(SHORT_DATE_FORMAT)
        )
    }
}

/// Appends the key the report was sorted by, verbatim.
#[derive(Debug, Clone)]
pub struct SortLayer<R: Report> {
    inner: R,
    sort_key: String,
}

impl<R: Report> SortLayer<R> {
    pub fn new(inner: R, sort_key: impl Into<String>) -> Self {
        Self {
            inner,
            sort_key: sort_key.into(),
        }
    }
}

impl<R: Report> Report for SortLayer<R> {
    fn generate(&self) -> String {
        format!("{}\nSorted by: {}", self.inner.generate(), self.sort_key)
    }
}

/// Flattens the wrapped report onto one comma-joined line under a CSV label.
#[derive(Debug, Clone)]
pub struct CsvLayer<R: Report> {
    inner: R,
}

impl<R: Report> CsvLayer<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Report> Report for CsvLayer<R> {
    fn generate(&self) -> String {
        let data = self.inner.generate();
        format!("{}\n{}", CSV_LABEL, data.replace('\n', ","))
    }
}

/// Puts a PDF label above the wrapped report, leaving its text untouched.
#[derive(Debug, Clone)]
pub struct PdfLayer<R: Report> {
    inner: R,
}

impl<R: Report> PdfLayer<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Report> Report for PdfLayer<R> {
    fn generate(&self) -> String {
        format!("{}\n{}", PDF_LABEL, self.inner.generate())
    }
}

/// Fluent wrapping: `SalesSource.sort_by("Date").export_csv()`.
pub trait ReportExt: Report + Sized {
    fn filter_by_dates(self, start: NaiveDate, end: NaiveDate) -> DateRangeLayer<Self> {
        DateRangeLayer::new(self, start, end)
    }

    fn sort_by(self, sort_key: impl Into<String>) -> SortLayer<Self> {
        SortLayer::new(self, sort_key)
    }

    fn export_csv(self) -> CsvLayer<Self> {
        CsvLayer::new(self)
    }

    fn export_pdf(self) -> PdfLayer<Self> {
        PdfLayer::new(self)
    }

    fn boxed(self) -> Box<dyn Report>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<R: Report + Sized> ReportExt for R {}
