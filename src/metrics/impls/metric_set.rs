use crate::metrics::enums::metric_kind::MetricKind;
use crate::metrics::structs::metric_family::{LabelSet, MetricFamily};
use crate::metrics::structs::metric_set::MetricSet;

impl MetricSet {
    pub fn new() -> MetricSet
    {
        MetricSet::default()
    }

    /// Records one sample. Samples sharing name and label set are summed, so
    /// the set never holds duplicate series.
    pub fn add(&mut self, name: &str, help: &str, kind: MetricKind, labels: LabelSet, value: f64)
    {
        let family = match self.families.iter().position(|family| family.name == name) {
            Some(index) => &mut self.families[index],
            None => {
                self.families.push(MetricFamily::new(name, help, kind));
                let last = self.families.len() - 1;
                &mut self.families[last]
            }
        };
        family.observe(labels, value);
    }

    /// Folds `other` into this set, so every family is rendered with a single
    /// HELP and TYPE header.
    pub fn merge(&mut self, other: MetricSet)
    {
        for family in other.families {
            match self.families.iter_mut().find(|existing| existing.name == family.name) {
                Some(existing) => {
                    for (labels, value) in family.samples {
                        existing.observe(labels, value);
                    }
                }
                None => self.families.push(family),
            }
        }
    }

    pub fn family(&self, name: &str) -> Option<&MetricFamily>
    {
        self.families.iter().find(|family| family.name == name)
    }

    pub fn get(&self, name: &str, labels: &[(&str, &str)]) -> Option<f64>
    {
        self.family(name).and_then(|family| family.get(labels))
    }

    pub fn len(&self) -> usize
    {
        self.families.iter().map(|family| family.samples.len()).sum()
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    pub fn render(&self) -> String
    {
        let mut output = String::new();
        for family in self.families.iter() {
            family.render(&mut output);
        }
        output
    }
}
