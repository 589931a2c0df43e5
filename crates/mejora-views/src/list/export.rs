use chrono::NaiveDate;

type Accessor<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// One CSV column: a header and how to read the cell from a record.
pub struct Column<T> {
    pub header: String,
    accessor: Accessor<T>,
}

impl<T> Column<T> {
    pub fn new(
        header: impl Into<String>,
        accessor: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            header: header.into(),
            accessor: Box::new(accessor),
        }
    }

    #[must_use]
    pub fn value(&self, record: &T) -> String {
        (self.accessor)(record)
    }
}

/// Serialize records as comma-delimited CSV with one header row.
///
/// Fields containing a comma, quote, or line break are double-quoted with
/// inner quotes doubled. Row order matches input order.
#[must_use]
pub fn to_csv<T>(records: &[T], columns: &[Column<T>]) -> String {
    if columns.is_empty() {
        return String::new();
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    let header = columns.iter().map(|c| c.header.clone()).collect::<Vec<_>>();
    let rows = std::iter::once(header).chain(
        records
            .iter()
            .map(|record| columns.iter().map(|c| c.value(record)).collect::<Vec<String>>()),
    );

    for row in rows {
        if let Err(error) = writer.write_record(&row) {
            tracing::warn!(%error, "csv row could not be written; export truncated");
            break;
        }
    }

    match writer.into_inner() {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(error) => {
            tracing::warn!(%error, "csv buffer could not be flushed");
            String::new()
        }
    }
}

/// `<prefix>_<YYYY-MM-DD>.csv`
#[must_use]
pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}_{}.csv", date.format("%Y-%m-%d"))
}
