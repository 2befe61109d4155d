use std::fmt;

use super::EnumMeta;

/// Industry a client of the agency operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[repr(i32)]
pub enum Industry {
    Technology = 1,
    Finance = 2,
    Healthcare = 3,
    Retail = 4,
    Education = 5,
    RealEstate = 6,
    Manufacturing = 7,
    Automotive = 8,
    FoodAndBeverage = 9,
    Hospitality = 10,
    Legal = 11,
    NonProfit = 12,
    Government = 13,
    Telecommunications = 14,
    Other = 15,
}

impl Industry {
    pub const ALL: [Industry; 15] = [
        Industry::Technology,
        Industry::Finance,
        Industry::Healthcare,
        Industry::Retail,
        Industry::Education,
        Industry::RealEstate,
        Industry::Manufacturing,
        Industry::Automotive,
        Industry::FoodAndBeverage,
        Industry::Hospitality,
        Industry::Legal,
        Industry::NonProfit,
        Industry::Government,
        Industry::Telecommunications,
        Industry::Other,
    ];
}

impl Default for Industry {
    fn default() -> Self {
        Industry::Technology
    }
}

impl EnumMeta for Industry {
    fn variant_name(&self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::Finance => "Finance",
            Industry::Healthcare => "Healthcare",
            Industry::Retail => "Retail",
            Industry::Education => "Education",
            Industry::RealEstate => "RealEstate",
            Industry::Manufacturing => "Manufacturing",
            Industry::Automotive => "Automotive",
            Industry::FoodAndBeverage => "FoodAndBeverage",
            Industry::Hospitality => "Hospitality",
            Industry::Legal => "Legal",
            Industry::NonProfit => "NonProfit",
            Industry::Government => "Government",
            Industry::Telecommunications => "Telecommunications",
            Industry::Other => "Other",
        }
    }

    fn label(&self) -> Option<&'static str> {
        Some(match self {
            Industry::Technology => "Information Technology",
            Industry::Finance => "Finance",
            Industry::Healthcare => "Healthcare Services",
            Industry::Retail => "Retail",
            Industry::Education => "Education",
            Industry::RealEstate => "Real Estate",
            Industry::Manufacturing => "Manufacturing Industry",
            Industry::Automotive => "Automotive",
            Industry::FoodAndBeverage => "Food & Beverage",
            Industry::Hospitality => "Hospitality & Tourism",
            Industry::Legal => "Legal Services",
            Industry::NonProfit => "Non-Profit",
            Industry::Government => "Government",
            Industry::Telecommunications => "Telecommunications",
            Industry::Other => "Other",
        })
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
