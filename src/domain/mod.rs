pub mod yip;
