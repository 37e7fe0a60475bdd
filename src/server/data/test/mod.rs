mod degree;
mod department;
mod teacher;
