use csv::StringRecord;

/// Column headers of the store and of every tabular export, in order.
pub const COLUMNS: [&str; 6] = [
    "Data",
    "Hora Entrada",
    "Hora Saída",
    "Horas Trabalhadas",
    "Valor Recebido",
    "Mês",
];

pub const COL_DATE: usize = 0;
pub const COL_CLOCK_IN: usize = 1;
pub const COL_CLOCK_OUT: usize = 2;
pub const COL_HOURS: usize = 3;
pub const COL_PAY: usize = 4;
pub const COL_MONTH: usize = 5;

/// Maps each schema column to its position in a header row, so the file
/// may list columns in any order.
#[derive(Debug)]
pub struct ColumnIndex {
    positions: [usize; 6],
}

impl ColumnIndex {
    /// Resolve positions from `headers`, or return the missing column names.
    pub fn resolve(headers: &StringRecord) -> Result<Self, Vec<&'static str>> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        let mut positions = [0usize; 6];
        let mut missing = Vec::new();

        for (i, col) in COLUMNS.iter().enumerate() {
            match normalized.iter().position(|h| h == col) {
                Some(p) => positions[i] = p,
                None => missing.push(*col),
            }
        }

        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(Self { positions })
    }

    /// Cell for schema column `col`; short rows read as empty.
    pub fn get<'a>(&self, row: &'a StringRecord, col: usize) -> &'a str {
        row.get(self.positions[col]).unwrap_or("")
    }
}
