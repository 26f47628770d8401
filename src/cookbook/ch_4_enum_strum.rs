use std::str::FromStr;

use crate::prelude::*;
use strum::VariantNames;
use strum_macros::{EnumString, EnumVariantNames};

// Example using strum crate.
//
// strum gives us
//   derive(EnumVariantNames) + trait strum::VariantNames => FancyColor::VARIANTS
//   derive(EnumString) + trait FromStr => FancyColor::from_str
// one `string` parser per variant name, tried in order, then FromStr
//

#[derive(PartialEq, Debug, EnumVariantNames, EnumString)]
pub enum FancyColor {
    Burgundy,
    Azure,
    Lime,
}

pub fn fancy_color() -> Parser<FancyColor> {
    or(FancyColor::VARIANTS.iter().map(|name| string(*name)))
        .try_map(|name| FancyColor::from_str(&name))
        .label("expected a fancy color")
}

/// `Azure,Lime, Burgundy`
pub fn palette() -> Parser<Vec<FancyColor>> {
    sep_by(fancy_color(), char(',').skip(many(char(' '))))
}
