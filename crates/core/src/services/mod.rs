pub mod accrual_service;
pub mod deposit_service;
pub mod fund_service;
pub mod networth_service;
