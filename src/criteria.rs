/// Layout of the restaurant register: how rows split into fields and which
/// positional fields hold the name and the schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Criteria {
    /// Separator between fields of a row.
    pub field_separator: char,

    /// Separator between clauses of a schedule cell.
    pub clause_separator: char,

    /// Zero-based position of the restaurant name.
    pub name_column: usize,

    /// Zero-based position of the opening hours.
    pub schedule_column: usize,

    /// Skip blank lines instead of treating them as records.
    pub skip_empty_rows: bool,
}

impl Default for Criteria {
    fn default() -> Self {
        Criteria {
            field_separator: ';',
            clause_separator: ',',
            name_column: 1,
            schedule_column: 4,
            skip_empty_rows: true,
        }
    }
}
