//! Frequency tables and fixed-width ASCII bar charts.

pub const DEFAULT_MAX_BAR: usize = 30;
const BAR_GLYPH: char = '#';

/// Counts keyed by label, remembering the order labels were first seen.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: &str) {
        self.add_n(label, 1);
    }

    pub fn add_n(&mut self, label: &str, n: usize) {
        match self.entries.iter_mut().find(|(l, _)| l == label) {
            Some((_, count)) => *count += n,
            None => self.entries.push((label.to_string(), n)),
        }
    }

    #[cfg(test)]
    pub fn get(&self, label: &str) -> usize {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map_or(0, |(_, count)| *count)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Descending by count; equal counts keep first-seen order.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut rows: Vec<(&str, usize)> = self
            .entries
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for (label, count) in iter {
            table.add_n(&label.into(), count);
        }
        table
    }
}

/// Bar length for `count`, scaled so `max` maps to `max_bar`.
pub fn bar_length(count: usize, max: usize, max_bar: usize) -> usize {
    if max == 0 || count == 0 {
        return 0;
    }
    ((count * max_bar + max / 2) / max).clamp(1, max_bar)
}

pub fn render_bar_chart(title: &str, table: &FrequencyTable, max_bar: usize) -> String {
    let mut out = format!("{title}\n");
    let rows = table.sorted();
    if rows.iter().all(|(_, count)| *count == 0) {
        out.push_str("  (no data)\n");
        return out;
    }

    let width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    let max = rows.first().map_or(0, |(_, count)| *count);

    for (label, count) in rows {
        let bar: String = std::iter::repeat_n(BAR_GLYPH, bar_length(count, max, max_bar)).collect();
        out.push_str(&format!("  {label:<width$} | {bar:<max_bar$} {count}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar_of(line: &str) -> usize {
        line.chars().filter(|c| *c == BAR_GLYPH).count()
    }

    #[test]
    fn bars_are_descending_and_scaled_to_max() {
        let table: FrequencyTable = [("B", 5), ("A", 10)].into_iter().collect();

        let chart = render_bar_chart("Counts", &table, 20);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[0], "Counts");
        assert!(lines[1].trim_start().starts_with('A'));
        assert!(lines[2].trim_start().starts_with('B'));
        assert_eq!(bar_of(lines[1]), 20);
        assert_eq!(bar_of(lines[2]), 10);
        assert!(lines[1].ends_with(" 10"));
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let mut table = FrequencyTable::new();
        table.add("zeta");
        table.add("alpha");
        table.add("mid");
        table.add("mid");

        let order: Vec<&str> = table.sorted().into_iter().map(|(l, _)| l).collect();
        assert_eq!(order, ["mid", "zeta", "alpha"]);
    }

    #[test]
    fn rows_are_fixed_width() {
        let table: FrequencyTable = [("short", 3), ("much longer label", 1)].into_iter().collect();
        let chart = render_bar_chart("T", &table, 10);
        let widths: Vec<usize> = chart.lines().skip(1).map(|l| l.find('|').unwrap()).collect();
        assert_eq!(widths[0], widths[1]);
    }

    #[test]
    fn small_nonzero_counts_get_a_visible_bar() {
        assert_eq!(bar_length(1, 1000, 30), 1);
        assert_eq!(bar_length(0, 1000, 30), 0);
        assert_eq!(bar_length(1000, 1000, 30), 30);
    }

    #[test]
    fn empty_table_renders_placeholder() {
        let chart = render_bar_chart("Nothing", &FrequencyTable::new(), 10);
        assert_eq!(chart, "Nothing\n  (no data)\n");
    }

    #[test]
    fn add_accumulates() {
        let mut table = FrequencyTable::new();
        table.add("x");
        table.add_n("x", 4);
        assert_eq!(table.get("x"), 5);
        assert_eq!(table.get("y"), 0);
        assert_eq!(table.total(), 5);
    }
}
