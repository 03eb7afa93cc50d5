//! Contract interfaces read by the decomposer.

use alloy_sol_types::sol;

sol! {
    /// Prices a set and its components in one call.
    interface ITokenSetsDecomposer {
        function decomposeAndPriceSet(address tokenSet)
            external
            view
            returns (
                address[] components,
                uint256[] units,
                uint256[] prices,
                uint256 setPrice
            );
    }

    /// Read-only subset of the fungible token interface.
    /// `decimals()` is read as a full word and narrowed by the caller.
    interface IERC20Metadata {
        function symbol() external view returns (string);
        function decimals() external view returns (uint256);
    }
}
