#![cfg(test)]

mod fixtures;
mod ownership;
mod queries;
mod scripts;
