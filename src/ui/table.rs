use tabled::{settings::Style, Table, Tabled};

use crate::axiom::AxiomView;
use crate::registry::RegistryStats;
use crate::signifier::{Role, Signifier};

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

/// Metric/value table
#[derive(Default)]
pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }
        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

pub fn stats_table(stats: &RegistryStats) -> String {
    let mut builder = TableBuilder::new();
    builder.add_row("Namespaces", &stats.namespaces.to_string());
    builder.add_row("Signifiers", &stats.signifiers.to_string());
    builder.add_row("Axioms", &stats.axioms.to_string());
    builder.add_row("Literal attributum", &stats.literal_axioms.to_string());
    builder.build()
}

#[derive(Tabled)]
pub struct SignifierRow {
    #[tabled(rename = "QName")]
    pub qname: String,
    #[tabled(rename = "prefLabel")]
    pub label: String,
    #[tabled(rename = "Participation")]
    pub participation: String,
    #[tabled(rename = "N/C/A")]
    pub usage: String,
}

impl From<&Signifier> for SignifierRow {
    fn from(signifier: &Signifier) -> Self {
        Self {
            qname: signifier.qname().to_string(),
            label: signifier.pref_label().to_string(),
            participation: signifier.participation().to_string(),
            usage: format!(
                "{}/{}/{}",
                signifier.axioms_as(Role::Nomen).len(),
                signifier.axioms_as(Role::Copula).len(),
                signifier.axioms_as(Role::Attributum).len()
            ),
        }
    }
}

#[derive(Tabled)]
pub struct AxiomRow {
    #[tabled(rename = "#")]
    pub id: usize,
    #[tabled(rename = "Nomen")]
    pub nomen: String,
    #[tabled(rename = "Copula")]
    pub copula: String,
    #[tabled(rename = "Attributum")]
    pub attributum: String,
}

impl From<&AxiomView<'_>> for AxiomRow {
    fn from(view: &AxiomView<'_>) -> Self {
        let attributum = match view.axiom().attributum().as_literal() {
            Some(value) => format!("{value:?}"),
            None => view.attributum_label().to_string(),
        };
        Self {
            id: view.axiom().id().index(),
            nomen: view.nomen_label().to_string(),
            copula: view.axiom().copula_label().to_string(),
            attributum,
        }
    }
}

pub fn rows_table<T: Tabled>(rows: &[T]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}
