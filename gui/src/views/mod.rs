mod nfts;
mod overview;
mod transact;
