//! Folder categories used to build the pick paths
use std::fmt;
use std::path::{Path, PathBuf};

use rand::Rng;

use super::selector::choose;

pub const CHARACTERS_DIR: &str = "Characters";
pub const VEHICLES_DIR: &str = "Vehicles";
pub const CUPS_DIR: &str = "Cups";

/// Weight class shared by characters and vehicles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    Large,
    Medium,
    Small,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Large, Size::Medium, Size::Small];

    /// Folder name for this size
    pub fn label(self) -> &'static str {
        match self {
            Size::Large => "Large",
            Size::Medium => "Medium",
            Size::Small => "Small",
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Size {
        *choose(&Self::ALL, rng).unwrap_or(&Size::Medium)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleType {
    Bikes,
    Cars,
}

impl VehicleType {
    pub const ALL: [VehicleType; 2] = [VehicleType::Bikes, VehicleType::Cars];

    /// Folder name for this vehicle type
    pub fn label(self) -> &'static str {
        match self {
            VehicleType::Bikes => "Bikes",
            VehicleType::Cars => "Cars",
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> VehicleType {
        *choose(&Self::ALL, rng).unwrap_or(&VehicleType::Cars)
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `<root>/Characters/<Size>`
pub fn character_dir(root: &Path, size: Size) -> PathBuf {
    root.join(CHARACTERS_DIR).join(size.label())
}

/// `<root>/Vehicles/<Type>/<Size>`
pub fn vehicle_dir(root: &Path, vehicle_type: VehicleType, size: Size) -> PathBuf {
    root.join(VEHICLES_DIR)
        .join(vehicle_type.label())
        .join(size.label())
}

/// `<root>/Cups`
pub fn cups_dir(root: &Path) -> PathBuf {
    root.join(CUPS_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_paths() {
        let root = Path::new("assets");
        assert_eq!(
            character_dir(root, Size::Small),
            Path::new("assets/Characters/Small")
        );
        assert_eq!(
            vehicle_dir(root, VehicleType::Bikes, Size::Large),
            Path::new("assets/Vehicles/Bikes/Large")
        );
        assert_eq!(cups_dir(root), Path::new("assets/Cups"));
    }

    #[test]
    fn test_random_categories_cover_every_label() {
        let mut rng = StdRng::seed_from_u64(7);
        let sizes: HashSet<_> = (0..200).map(|_| Size::random(&mut rng)).collect();
        let types: HashSet<_> = (0..200).map(|_| VehicleType::random(&mut rng)).collect();
        assert_eq!(sizes.len(), 3);
        assert_eq!(types.len(), 2);
    }
}
