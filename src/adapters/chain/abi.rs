//! Solidity ABI for the two deployed contracts.
//!
//! Only calldata encoding and return decoding are generated here; the
//! adapters submit the bytes themselves so the provider stays type-erased.

#![allow(missing_docs)]

use alloy::sol;

sol! {
    /// Tuple returned by `getAllListings()`.
    #[derive(Debug, PartialEq, Eq)]
    struct MarketListing {
        uint256 tokenId;
        address seller;
        uint256 price;
        bool active;
    }

    /// OpenNFT token contract.
    interface IOpenNft {
        function mint() external;
        function approveNFT(address marketplace, uint256 tokenId) external;
        function ownerOf(uint256 tokenId) external view returns (address);
        function tokenCounter() external view returns (uint256);
    }

    /// OpenNFT marketplace contract.
    interface IMarketplace {
        function listNFT(uint256 tokenId, uint256 price) external;
        function buyNFT(uint256 tokenId) external payable;
        function getAllListings() external view returns (MarketListing[] memory);
    }
}
