//! Shared appinfo fixtures for unit tests.
//!
//! The VDF text mirrors what a PICS product-info response carries: tab
//! separated KeyValues under an `appinfo` root, scalars mixed into the depot
//! table, per-branch manifest overrides and a trailing NUL.

use crate::catalog::ProductInfo;

pub const STARDEW_APP_ID: u32 = 413_150;

pub const STARDEW_APPINFO_VDF: &str = "\"appinfo\"
{
\t\"appid\"\t\t\"413150\"
\t\"common\"
\t{
\t\t\"name\"\t\t\"Stardew Valley\"
\t\t\"type\"\t\t\"Game\"
\t\t\"oslist\"\t\t\"windows,macos,linux\"
\t}
\t\"depots\"
\t{
\t\t\"baselanguages\"\t\t\"english,german,spanish\"
\t\t\"413151\"
\t\t{
\t\t\t\"name\"\t\t\"Stardew Valley Mac\"
\t\t\t\"config\"
\t\t\t{
\t\t\t\t\"oslist\"\t\t\"macos\"
\t\t\t}
\t\t\t\"manifests\"
\t\t\t{
\t\t\t\t\"public\"
\t\t\t\t{
\t\t\t\t\t\"gid\"\t\t\"1234567890123456789\"
\t\t\t\t\t\"size\"\t\t\"1073741824\"
\t\t\t\t\t\"download\"\t\t\"536870912\"
\t\t\t\t}
\t\t\t}
\t\t\t\"maxsize\"\t\t\"1073741824\"
\t\t}
\t\t\"413153\"
\t\t{
\t\t\t\"name\"\t\t\"Stardew Valley Windows\"
\t\t\t\"config\"
\t\t\t{
\t\t\t\t\"oslist\"\t\t\"windows\"
\t\t\t}
\t\t\t\"manifests\"
\t\t\t{
\t\t\t\t\"public\"
\t\t\t\t{
\t\t\t\t\t\"gid\"\t\t\"8881193748180768755\"
\t\t\t\t\t\"size\"\t\t\"1181116006\"
\t\t\t\t}
\t\t\t\t\"beta\"\t\t\"5555555555555555555\"
\t\t\t}
\t\t}
\t\t\"branches\"
\t\t{
\t\t\t\"public\"
\t\t\t{
\t\t\t\t\"buildid\"\t\t\"12345678\"
\t\t\t\t\"timeupdated\"\t\t\"1700000000\"
\t\t\t}
\t\t\t\"beta\"
\t\t\t{
\t\t\t\t\"buildid\"\t\t\"12400000\"
\t\t\t\t\"description\"\t\t\"Beta branch\"
\t\t\t\t\"timeupdated\"\t\t\"1710000000\"
\t\t\t}
\t\t}
\t}
}
\0";

/// Stardew Valley product info parsed from [`STARDEW_APPINFO_VDF`]
///
/// # Panics
///
/// Panics if the fixture no longer parses.
#[must_use]
#[allow(clippy::expect_used)]
pub fn stardew_product() -> ProductInfo {
    ProductInfo::from_vdf(STARDEW_APP_ID, STARDEW_APPINFO_VDF).expect("fixture VDF parses")
}
