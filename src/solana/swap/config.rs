use std::env;

// Mainnet protocol constants
pub const WSOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const RAYDIUM_AMM_PROGRAM: &str = "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8";
pub const RAYDIUM_CP_SWAP_PROGRAM: &str = "CPMMoo8L3F4NbTegBCKVNunggL7H1ZpdTHKxQB5qKP1C";

pub const SOL_DECIMALS: u8 = 9;

/// Positions of the accounts we read from a Raydium AMM v4 swap
/// instruction's account list.
#[derive(Debug, Clone)]
pub struct AmmAccountLayout {
    pub pool: usize,
    pub coin_vault: usize,
    pub pc_vault: usize,
}

impl Default for AmmAccountLayout {
    fn default() -> Self {
        Self {
            pool: 1,
            coin_vault: 5,
            pc_vault: 6,
        }
    }
}

/// Positions of the accounts we read from the leading CP swap inner
/// instruction's account list.
#[derive(Debug, Clone)]
pub struct CpSwapAccountLayout {
    pub signer: usize,
    pub pool: usize,
}

impl Default for CpSwapAccountLayout {
    fn default() -> Self {
        Self { signer: 0, pool: 3 }
    }
}

/// Protocol configuration for the swap decoder: which mints and program ids
/// identify a Raydium trade, and where inside each instruction layout the
/// accounts of interest sit. Injected into the decoder rather than read from
/// globals so tests and other networks can swap the values out.
#[derive(Debug, Clone)]
pub struct SwapConfig {
    pub wsol_mint: String,
    pub amm_program_id: String,
    pub cp_swap_program_id: String,
    pub native_decimals: u8,
    pub amm_accounts: AmmAccountLayout,
    pub cp_swap_accounts: CpSwapAccountLayout,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            wsol_mint: WSOL_MINT.to_string(),
            amm_program_id: RAYDIUM_AMM_PROGRAM.to_string(),
            cp_swap_program_id: RAYDIUM_CP_SWAP_PROGRAM.to_string(),
            native_decimals: SOL_DECIMALS,
            amm_accounts: AmmAccountLayout::default(),
            cp_swap_accounts: CpSwapAccountLayout::default(),
        }
    }
}

impl SwapConfig {
    /// Creates the configuration from environment variables, falling back to
    /// mainnet defaults.
    pub fn from_env() -> Self {
        Self {
            wsol_mint: env::var("WSOL_MINT").unwrap_or_else(|_| WSOL_MINT.to_string()),
            amm_program_id: env::var("RAYDIUM_AMM_PROGRAM")
                .unwrap_or_else(|_| RAYDIUM_AMM_PROGRAM.to_string()),
            cp_swap_program_id: env::var("RAYDIUM_CP_SWAP_PROGRAM")
                .unwrap_or_else(|_| RAYDIUM_CP_SWAP_PROGRAM.to_string()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_amm_layout_matches_protocol_positions() {
        let layout = AmmAccountLayout::default();
        assert_eq!(layout.pool, 1);
        assert_eq!(layout.coin_vault, 5);
        assert_eq!(layout.pc_vault, 6);
    }

    #[test]
    fn default_cp_swap_layout_matches_protocol_positions() {
        let layout = CpSwapAccountLayout::default();
        assert_eq!(layout.signer, 0);
        assert_eq!(layout.pool, 3);
    }
}
