// Rust guideline compliant 2026-10-12

//! Command implementations for the Shipyard CLI.

use chrono::{DateTime, Utc};
use clap::Args;
use shipyard_app::{AppError, RepoContext, Result, ShipFilter, ShipManager};
use shipyard_core::{Config, NewShip, ShipPatch, ShipType, Storage};

pub mod count;
pub mod create;
pub mod delete;
pub mod init;
pub mod list;
pub mod show;
pub mod update;

/// Filter flags shared by `list` and `count`.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Name contains this text (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,

    /// Planet contains this text (case-insensitive)
    #[arg(long)]
    pub planet: Option<String>,

    /// Ship type (transport, military, merchant)
    #[arg(long)]
    pub ship_type: Option<String>,

    /// Produced strictly after this epoch millisecond
    #[arg(long, allow_negative_numbers = true)]
    pub after: Option<i64>,

    /// Produced strictly before this epoch millisecond
    #[arg(long, allow_negative_numbers = true)]
    pub before: Option<i64>,

    /// Previously owned (true or false)
    #[arg(long)]
    pub is_used: Option<bool>,

    /// Minimum speed
    #[arg(long)]
    pub min_speed: Option<f64>,

    /// Maximum speed
    #[arg(long)]
    pub max_speed: Option<f64>,

    /// Minimum crew size
    #[arg(long)]
    pub min_crew_size: Option<i32>,

    /// Maximum crew size
    #[arg(long)]
    pub max_crew_size: Option<i32>,

    /// Minimum rating
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Maximum rating
    #[arg(long)]
    pub max_rating: Option<f64>,
}

impl FilterArgs {
    /// Converts the flags into filter criteria.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an unknown ship type or an
    /// out-of-range timestamp.
    pub fn to_filter(&self) -> Result<ShipFilter> {
        Ok(ShipFilter {
            name: self.name.clone(),
            planet: self.planet.clone(),
            ship_type: parse_ship_type(self.ship_type.as_deref())?,
            after: self.after.map(|millis| from_millis("after", millis)).transpose()?,
            before: self.before.map(|millis| from_millis("before", millis)).transpose()?,
            is_used: self.is_used,
            min_speed: self.min_speed,
            max_speed: self.max_speed,
            min_crew_size: self.min_crew_size,
            max_crew_size: self.max_crew_size,
            min_rating: self.min_rating,
            max_rating: self.max_rating,
        })
    }
}

/// Settable ship fields shared by `create` and `update`.
///
/// Every flag is optional here; `create` leaves required-field checks to
/// the manager so that they are reported the same way everywhere.
#[derive(Debug, Clone, Default, Args)]
pub struct ShipFieldArgs {
    /// Ship name (1-50 characters)
    #[arg(long)]
    pub name: Option<String>,

    /// Home planet (1-50 characters)
    #[arg(long)]
    pub planet: Option<String>,

    /// Ship type (transport, military, merchant)
    #[arg(long)]
    pub ship_type: Option<String>,

    /// Production date as epoch milliseconds (year 2800-3019)
    #[arg(long)]
    pub prod_date: Option<i64>,

    /// Speed (0.01-0.99)
    #[arg(long)]
    pub speed: Option<f64>,

    /// Crew size (1-9999)
    #[arg(long)]
    pub crew_size: Option<i32>,

    /// Previously owned (true or false)
    #[arg(long)]
    pub is_used: Option<bool>,
}

impl ShipFieldArgs {
    /// Converts the flags into a creation candidate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an unknown ship type or an
    /// out-of-range timestamp.
    pub fn into_new_ship(self) -> Result<NewShip> {
        Ok(NewShip {
            ship_type: parse_ship_type(self.ship_type.as_deref())?,
            prod_date: self.prod_date.map(|millis| from_millis("prodDate", millis)).transpose()?,
            name: self.name,
            planet: self.planet,
            speed: self.speed,
            crew_size: self.crew_size,
            is_used: self.is_used,
        })
    }

    /// Converts the flags into a partial update.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an unknown ship type or an
    /// out-of-range timestamp.
    pub fn into_patch(self) -> Result<ShipPatch> {
        Ok(ShipPatch {
            ship_type: parse_ship_type(self.ship_type.as_deref())?,
            prod_date: self.prod_date.map(|millis| from_millis("prodDate", millis)).transpose()?,
            name: self.name,
            planet: self.planet,
            speed: self.speed,
            crew_size: self.crew_size,
            is_used: self.is_used,
        })
    }
}

/// Opens the ship manager for an initialized repository.
///
/// # Errors
///
/// Returns `RepoNotInitialized` if `.shipyard` is missing, or a storage error.
pub fn open_manager(context: &RepoContext, config: &Config) -> Result<ShipManager<Storage>> {
    RepoContext::discover(Some(context.root()))?.open_manager(config)
}

fn parse_ship_type(value: Option<&str>) -> Result<Option<ShipType>> {
    Ok(value.map(str::parse::<ShipType>).transpose()?)
}

fn from_millis(field: &str, millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        AppError::invalid_field(field, format!("timestamp {millis} is out of range"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_args_convert_millis() {
        let args = FilterArgs {
            ship_type: Some("military".to_string()),
            after: Some(0),
            ..FilterArgs::default()
        };
        let filter = args.to_filter().unwrap();
        assert_eq!(filter.ship_type, Some(ShipType::Military));
        assert_eq!(filter.after, DateTime::from_timestamp_millis(0));
        assert!(filter.before.is_none());
    }

    #[derive(Debug, clap::Parser)]
    struct FilterHarness {
        #[command(flatten)]
        filter: FilterArgs,
    }

    #[test]
    fn test_filter_args_accept_pre_epoch_bounds() {
        use clap::Parser;

        let parsed =
            FilterHarness::try_parse_from(["list", "--after", "-86400000", "--before", "-1"]).unwrap();
        assert_eq!(parsed.filter.after, Some(-86_400_000));
        assert_eq!(parsed.filter.before, Some(-1));

        let filter = parsed.filter.to_filter().unwrap();
        assert_eq!(filter.after, DateTime::from_timestamp_millis(-86_400_000));
    }

    #[test]
    fn test_unknown_ship_type_is_invalid_argument() {
        let args = ShipFieldArgs {
            ship_type: Some("yacht".to_string()),
            ..ShipFieldArgs::default()
        };
        let error = args.into_patch().unwrap_err();
        assert_eq!(error.code(), shipyard_app::ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_out_of_range_millis_rejected() {
        let args = ShipFieldArgs {
            prod_date: Some(i64::MAX),
            ..ShipFieldArgs::default()
        };
        let error = args.into_new_ship().unwrap_err();
        assert!(error.to_string().contains("prodDate"));
    }
}
