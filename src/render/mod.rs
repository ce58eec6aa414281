pub mod echarts;
