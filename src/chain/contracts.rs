//! ABI bindings for the sequencer registry and the job predicate.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface ISequencer {
        function numJobs() external view returns (uint256);
        function jobAt(uint256 index) external view returns (address);
    }

    #[sol(rpc)]
    interface IJob {
        function workable(bytes32 network) external view returns (bool canWork, bytes memory args);
    }
}
