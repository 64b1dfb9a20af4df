pub mod policyreport;
