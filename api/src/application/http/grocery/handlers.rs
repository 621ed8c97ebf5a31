pub mod generate_grocery_list;
