use std::collections::BTreeMap;
use crate::metrics::enums::metric_kind::MetricKind;
use crate::metrics::structs::metric_family::{LabelSet, MetricFamily};

impl MetricFamily {
    pub fn new(name: &str, help: &str, kind: MetricKind) -> MetricFamily
    {
        MetricFamily {
            name: name.to_string(),
            help: help.to_string(),
            kind,
            samples: BTreeMap::new(),
        }
    }

    /// Adds `value` to the sample with exactly these labels, creating it if needed.
    pub fn observe(&mut self, labels: LabelSet, value: f64)
    {
        *self.samples.entry(labels).or_insert(0.0) += value;
    }

    pub fn get(&self, labels: &[(&str, &str)]) -> Option<f64>
    {
        self.samples.iter().find_map(|(sample_labels, value)| {
            let matches = sample_labels.len() == labels.len()
                && sample_labels.iter().zip(labels.iter()).all(|((k, v), (ek, ev))| k == ek && v == ev);
            matches.then_some(*value)
        })
    }

    pub fn render(&self, output: &mut String)
    {
        if self.samples.is_empty() {
            return;
        }
        output.push_str(&format!("# HELP {} {}\n", self.name, escape_help(&self.help)));
        output.push_str(&format!("# TYPE {} {}\n", self.name, self.kind));
        for (labels, value) in self.samples.iter() {
            output.push_str(&self.name);
            if !labels.is_empty() {
                let rendered: Vec<String> = labels.iter()
                    .map(|(key, value)| format!("{key}=\"{}\"", escape_label_value(value)))
                    .collect();
                output.push('{');
                output.push_str(&rendered.join(","));
                output.push('}');
            }
            output.push_str(&format!(" {value}\n"));
        }
    }
}

pub fn escape_label_value(value: &str) -> String
{
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn escape_help(help: &str) -> String
{
    help.replace('\\', "\\\\").replace('\n', "\\n")
}
