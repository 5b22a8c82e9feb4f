use crate::axiom::AxiomView;
use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn header(text: &str) {
    if crate::output::is_quiet() {
        return;
    }
    println!("{} {}", Icons::BOOK, text.style(theme().header.clone()));
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn info(label: &str, value: &str) {
    println!("{} {}: {}", Icons::INFO, label.style(theme().dim.clone()), value);
}

pub fn section(title: &str) {
    println!();
    println!("━{}━", title.style(theme().header.clone()));
}

pub fn muted(text: &str) -> String {
    text.style(theme().muted.clone()).to_string()
}

pub fn literal(text: &str) -> String {
    format!("{:?}", text).style(theme().literal.clone()).to_string()
}

/// One-line `nomen copula attributum` rendering of an axiom
pub fn axiom_line(view: &AxiomView<'_>) -> String {
    let attributum = if view.axiom().attributum().is_literal() {
        literal(view.attributum_label())
    } else {
        view.attributum_label().style(theme().attributum.clone()).to_string()
    };
    format!(
        "{} {} {}",
        view.nomen_label().style(theme().nomen.clone()),
        view.copula_label().style(theme().copula.clone()),
        attributum
    )
}

pub fn summary_row(label: &str, value: &str) {
    println!("  {} {}", label.style(theme().dim.clone()), value);
}
