//! Shared building blocks of the staking site: Pico.css primitives, links and
//! addresses, plus the three page-level components (resource card, site
//! header, stake overview panel).
pub mod address;
pub mod empty_state;
pub mod link;
pub mod panel_header;
pub mod pico;
pub mod resource_card;
pub mod site_header;
pub mod stake_overview;
