mod counselling;
mod health_check;
