/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Form encoders for the form request primitive
pub mod form;
/// The client and its request primitives
pub mod http;
/// Response envelopes and parse helpers
pub mod responses;
