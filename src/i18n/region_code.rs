pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";    
    }

    /// Returns `true` for the placeholder used when no region is known,
    /// including the empty string.
    pub fn is_unknown(region_code: &str) -> bool {
        region_code.is_empty() || region_code == Self::zz()
    }
}
