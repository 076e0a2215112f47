//! ERC20 token contract bindings.

use alloy_sol_types::{sol, SolCall};

sol! {
    /// Standard ERC20 token interface
    interface ERC20 {
        /// Get token name
        function name() external view returns (string memory);

        /// Get token symbol
        function symbol() external view returns (string memory);

        /// Get token decimals
        function decimals() external view returns (uint8);

        /// Get total supply
        function totalSupply() external view returns (uint256);

        /// Get token balance of an account
        function balanceOf(address account) external view returns (uint256);

        /// Transfer tokens to recipient
        function transfer(address recipient, uint256 amount) external returns (bool);

        /// Approve spender to spend tokens
        function approve(address spender, uint256 amount) external returns (bool);

        /// Transfer tokens from sender to recipient (requires allowance)
        function transferFrom(address sender, address recipient, uint256 amount) external returns (bool);

        /// Get allowance granted by owner to spender
        function allowance(address owner, address spender) external view returns (uint256);
    }
}

/// Canonical signature and selector of every ERC20 call, as derived by
/// `sol!`, in interface declaration order.
pub fn call_selectors() -> [(&'static str, [u8; 4]); 9] {
    [
        (ERC20::nameCall::SIGNATURE, ERC20::nameCall::SELECTOR),
        (ERC20::symbolCall::SIGNATURE, ERC20::symbolCall::SELECTOR),
        (ERC20::decimalsCall::SIGNATURE, ERC20::decimalsCall::SELECTOR),
        (ERC20::totalSupplyCall::SIGNATURE, ERC20::totalSupplyCall::SELECTOR),
        (ERC20::balanceOfCall::SIGNATURE, ERC20::balanceOfCall::SELECTOR),
        (ERC20::transferCall::SIGNATURE, ERC20::transferCall::SELECTOR),
        (ERC20::approveCall::SIGNATURE, ERC20::approveCall::SELECTOR),
        (ERC20::transferFromCall::SIGNATURE, ERC20::transferFromCall::SELECTOR),
        (ERC20::allowanceCall::SIGNATURE, ERC20::allowanceCall::SELECTOR),
    ]
}
