pub mod suggest_swaps;
