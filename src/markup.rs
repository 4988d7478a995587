//! Small markdown helpers (pipe tables).

/// Markdown pipe-table builder.
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: &[&str]) -> Self {
        Table {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn append(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("| {} |\n", self.columns.join(" | ")));
        out.push_str(&format!(
            "|{}|\n",
            self.columns.iter().map(|_| ":--- ").collect::<Vec<_>>().join("|")
        ));
        for row in &self.rows {
            out.push_str(&format!("| {} |\n", row.join(" | ")));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_pipe_table() {
        let mut t = Table::new(&["Segment", "Occurrence"]);
        t.append(vec!["a".to_string(), "5".to_string()]);
        t.append(vec!["b".to_string(), "3".to_string()]);
        let md = t.render();
        assert_eq!(
            md,
            "| Segment | Occurrence |\n|:--- |:--- |\n| a | 5 |\n| b | 3 |\n"
        );
    }
}
