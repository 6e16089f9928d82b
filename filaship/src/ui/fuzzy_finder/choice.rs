use std::{borrow::Cow, sync::Arc};

use skim::{
    Skim, SkimItem, SkimItemReceiver, SkimItemSender,
    prelude::{SkimOptionsBuilder, unbounded},
};

use crate::ui::fuzzy_finder::COLUMN_SEPARATOR;

/// One selectable entry: the value handed back on selection and the text
/// shown next to it.
#[derive(Clone, Debug)]
pub struct Choice {
    value: String,
    description: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, description: impl Into<String>) -> Self {
        Self { value: value.into(), description: description.into() }
    }
}

impl SkimItem for Choice {
    fn text(&self) -> Cow<'_, str> { format!("{} {}", self.value, self.description).into() }

    fn output(&self) -> Cow<'_, str> { self.value.as_str().into() }

    fn display<'a>(&'a self, _context: skim::DisplayContext<'a>) -> skim::AnsiString<'a> {
        skim::AnsiString::from([self.value.as_str(), self.description.as_str()].join(COLUMN_SEPARATOR))
    }
}

pub trait ChoiceListExt {
    fn items(&self) -> Vec<Arc<dyn SkimItem>>;

    /// Lets the user pick entries and returns their values. Several entries
    /// can be marked with TAB when `multi` is set. Aborting selects nothing.
    fn select(&self, prompt: &str, multi: bool) -> Vec<String> {
        let items = self.items();
        if items.is_empty() {
            return Vec::new();
        }

        let (tx_item, rx_item): (SkimItemSender, SkimItemReceiver) = unbounded();
        for item in items {
            drop(tx_item.send(item));
        }
        drop(tx_item);

        let options = SkimOptionsBuilder::default()
            .height("50%".to_string())
            .prompt(format!("{prompt} > "))
            .multi(multi)
            .build()
            .expect("Skim options build failed");

        if let Some(out) = Skim::run_with(&options, Some(rx_item)) {
            if out.is_abort {
                return Vec::new();
            }
            out.selected_items.iter().map(|item| item.output().to_string()).collect()
        } else {
            Vec::new()
        }
    }
}

impl ChoiceListExt for [Choice] {
    fn items(&self) -> Vec<Arc<dyn SkimItem>> {
        self.iter().map(|choice| -> Arc<dyn SkimItem> { Arc::new(choice.clone()) }).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_output_is_the_value() {
        let choice = Choice::new("redis", "Redis 7 In-Memory Cache & Message Broker");

        assert_eq!(choice.output(), "redis");
        assert!(choice.text().contains("Message Broker"));
    }

    #[test]
    fn test_empty_list_selects_nothing() {
        let choices: Vec<Choice> = Vec::new();
        assert!(choices.select("Services", true).is_empty());
    }
}
