mod build_zone_config;

pub use build_zone_config::BuildZoneConfigUseCase;
