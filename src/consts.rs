/// stETH token contract addresses
pub const STETH_MAINNET: &str = "0xae7ab96520de3a18e5e111b5eaab095312d7fe84";
pub const STETH_SEPOLIA: &str = "0xbf52359044670050842df67da8183d7d278477f5";

/// Block explorer base URLs
pub const EXPLORER_MAINNET: &str = "https://etherscan.io";
pub const EXPLORER_SEPOLIA: &str = "https://sepolia.etherscan.io";

/// ERC-20 transfer(address,uint256) function selector
pub const ERC20_TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];

/// ETH and stETH both use 18 decimal places
pub const TOKEN_DECIMALS: u32 = 18;

/// Decimal places shown by balance displays
pub const DISPLAY_DECIMALS: usize = 3;

/// How long a terminal status stays visible before the flow resets to idle
pub const DEFAULT_COOLDOWN_MILLIS: u64 = 5_000;
