use super::category::Category;
use crate::utils::time::minutes_to_hours;
use serde::Serialize;

/// Minutes of one shift split into the five paid-hour categories.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourBucket {
    pub day: i64,
    pub night: i64,
    pub sunday: i64,
    pub holiday: i64,
    pub supplemental: i64,
}

impl HourBucket {
    pub fn get(&self, cat: Category) -> i64 {
        match cat {
            Category::Day => self.day,
            Category::Night => self.night,
            Category::Sunday => self.sunday,
            Category::Holiday => self.holiday,
            Category::Supplemental => self.supplemental,
        }
    }

    fn slot(&mut self, cat: Category) -> &mut i64 {
        match cat {
            Category::Day => &mut self.day,
            Category::Night => &mut self.night,
            Category::Sunday => &mut self.sunday,
            Category::Holiday => &mut self.holiday,
            Category::Supplemental => &mut self.supplemental,
        }
    }

    pub fn add(&mut self, cat: Category, minutes: i64) {
        *self.slot(cat) += minutes;
    }

    /// Removes up to `minutes` from `cat` and returns what was actually
    /// removed. The category never drops below zero.
    pub fn draw(&mut self, cat: Category, minutes: i64) -> i64 {
        let slot = self.slot(cat);
        let taken = minutes.clamp(0, (*slot).max(0));
        *slot -= taken;
        taken
    }

    /// Empties `cat` into the supplemental category.
    pub fn move_to_supplemental(&mut self, cat: Category) {
        let moved = self.draw(cat, self.get(cat));
        self.supplemental += moved;
    }

    pub fn hours(&self, cat: Category) -> f64 {
        minutes_to_hours(self.get(cat))
    }

    pub fn total(&self) -> i64 {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }

    pub fn negative_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.get(*c) < 0)
            .collect()
    }

    /// Forces every negative category to zero.
    pub fn clamp_negative(&mut self) {
        for cat in Category::ALL {
            let slot = self.slot(cat);
            *slot = (*slot).max(0);
        }
    }

    pub fn merge(&mut self, other: &HourBucket) {
        for cat in Category::ALL {
            self.add(cat, other.get(cat));
        }
    }
}
